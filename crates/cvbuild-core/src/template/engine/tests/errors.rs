//! Error handling tests for template engine

use super::helpers::{resume_data, templates_dir};
use super::*;

#[test]
fn test_error_template_not_found() {
    let dir = templates_dir(&[]);
    let engine = TemplateEngine::new(dir.path(), false).unwrap();

    match engine.render("main.tex.j2", &resume_data()) {
        Err(TemplateError::NotFound { name, dir: searched }) => {
            assert_eq!(name, "main.tex.j2");
            assert_eq!(searched, dir.path());
        }
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[test]
fn test_error_syntax_reports_line() {
    let dir = templates_dir(&[("main.tex.j2", "line one\n((* for x in skills *))\n((( x )))\n")]);
    let engine = TemplateEngine::new(dir.path(), false).unwrap();

    match engine.render("main.tex.j2", &resume_data()) {
        Err(TemplateError::Syntax { name, line, .. }) => {
            assert_eq!(name, "main.tex.j2");
            assert!(line.is_some());
        }
        other => panic!("Expected Syntax error, got {:?}", other),
    }
}

#[test]
fn test_error_strict_undefined() {
    let engine = TemplateEngine::new(".", true).unwrap();

    let result = engine.render_str(r"\phone{((( phone )))}", &resume_data());
    assert!(matches!(result, Err(TemplateError::Render { .. })));
}

#[test]
fn test_strict_mode_still_renders_defined_keys() {
    let engine = TemplateEngine::new(".", true).unwrap();

    let result = engine.render_str("((( name )))", &resume_data()).unwrap();
    assert_eq!(result, "Ada Lovelace");
}

#[test]
fn test_error_display_includes_location() {
    let err = TemplateError::Render {
        name: "sidebar.tex.j2".to_string(),
        line: Some(4),
        message: "undefined value".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to render sidebar.tex.j2:4: undefined value"
    );
}
