//! Shared test helpers for template engine tests

use crate::data::ResumeData;
use cvbuild_testkit::temp_dir_in_workspace;
use std::path::Path;
use tempfile::TempDir;

/// Resume data similar to a real `data/english.yaml`
pub(super) fn resume_data() -> ResumeData {
    let yaml = r#"
name: Ada Lovelace
tagline: Analyst \& Metaphysician
email: ada@example.com
skills:
  - Mathematics
  - Poetical science
experience:
  - title: Analyst
    company: Analytical Engine Ltd
    years: 3
  - title: Translator
    company: Menabrea Notes
    years: 1
"#;
    ResumeData::from_yaml_str(yaml, "english", Path::new("english.yaml")).unwrap()
}

/// Create a templates directory holding the given `(name, source)` pairs
pub(super) fn templates_dir(files: &[(&str, &str)]) -> TempDir {
    let temp = temp_dir_in_workspace();
    for (name, source) in files {
        std::fs::write(temp.path().join(name), source).unwrap();
    }
    temp
}
