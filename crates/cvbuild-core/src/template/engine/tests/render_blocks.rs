//! Block tag tests for template engine

use super::helpers::{resume_data, templates_dir};
use super::*;

#[test]
fn test_render_for_loop() {
    let engine = TemplateEngine::new(".", false).unwrap();
    let source = r"((* for skill in skills *))\cvtag{((( skill )))}((* endfor *))";

    let result = engine.render_str(source, &resume_data()).unwrap();
    assert_eq!(result, r"\cvtag{Mathematics}\cvtag{Poetical science}");
}

#[test]
fn test_render_nested_fields_in_loop() {
    let engine = TemplateEngine::new(".", false).unwrap();
    let source = "((* for job in experience *))\\cvevent{((( job.title )))}{((( job.company )))}\n((* endfor *))";

    let result = engine.render_str(source, &resume_data()).unwrap();
    assert!(result.contains(r"\cvevent{Analyst}{Analytical Engine Ltd}"));
    assert!(result.contains(r"\cvevent{Translator}{Menabrea Notes}"));
}

#[test]
fn test_render_conditional_on_lang() {
    let engine = TemplateEngine::new(".", false).unwrap();
    let source = r"((* if lang == 'french' *))Expérience((* else *))Experience((* endif *))";

    let result = engine.render_str(source, &resume_data()).unwrap();
    assert_eq!(result, "Experience");
}

#[test]
fn test_include_sibling_template() {
    let dir = templates_dir(&[
        ("main.tex.j2", r"\begin{document}((* include 'header.tex.j2' *))\end{document}"),
        ("header.tex.j2", r"\name{((( name )))}"),
    ]);
    let engine = TemplateEngine::new(dir.path(), false).unwrap();

    let result = engine.render("main.tex.j2", &resume_data()).unwrap();
    assert_eq!(result, r"\begin{document}\name{Ada Lovelace}\end{document}");
}
