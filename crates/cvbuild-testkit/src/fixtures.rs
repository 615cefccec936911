//! Resume project fixtures
//!
//! Builds the on-disk layout a real resume repository has: YAML data per
//! language, the two `.tex.j2` templates, and the two static assets.

use std::fs;
use std::path::{Path, PathBuf};

/// Body template exercising variables, loops and the sidebar input
pub const MAIN_TEMPLATE: &str = r"\documentclass[10pt,a4paper]{altacv}
((# rendered by cvbuild #))
\name{((( name )))}
\tagline{((( tagline )))}
\begin{document}
\makecvheader
\input{sidebar}
\cvsection{((* if lang == 'french' *))Expérience((* else *))Experience((* endif *))}
((* for job in experience *))
\cvevent{((( job.title )))}{((( job.company )))}{}{}
((* endfor *))
\end{document}
";

/// Sidebar template
pub const SIDEBAR_TEMPLATE: &str = r"\cvsection{Skills}
((* for skill in skills *))\cvtag{((( skill )))}((* endfor *))
";

/// English resume data
pub const ENGLISH_DATA: &str = r"name: Ada Lovelace
tagline: Analyst \& Metaphysician
skills:
  - Mathematics
  - Poetical science
experience:
  - title: Analyst
    company: Analytical Engine Ltd
";

/// French resume data
pub const FRENCH_DATA: &str = r"name: Ada Lovelace
tagline: Analyste \& Métaphysicienne
skills:
  - Mathématiques
experience:
  - title: Analyste
    company: Analytical Engine Ltd
";

/// Builder for a resume project under a temporary root
pub struct ProjectFixture {
    root: PathBuf,
}

impl ProjectFixture {
    /// Empty project at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project with english + french data, both templates and both assets
    pub fn complete(root: impl Into<PathBuf>) -> Self {
        Self::new(root)
            .with_data("english", ENGLISH_DATA)
            .with_data("french", FRENCH_DATA)
            .with_template("main.tex.j2", MAIN_TEMPLATE)
            .with_template("sidebar.tex.j2", SIDEBAR_TEMPLATE)
            .with_asset("altacv.cls", b"\\NeedsTeXFormat{LaTeX2e}\n")
            .with_asset("profile_picture.png", &[0x89, b'P', b'N', b'G'])
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `data/<lang>.yaml`
    pub fn with_data(self, lang: &str, yaml: &str) -> Self {
        self.write(&format!("data/{lang}.yaml"), yaml.as_bytes())
    }

    /// Write `templates/<name>`
    pub fn with_template(self, name: &str, source: &str) -> Self {
        self.write(&format!("templates/{name}"), source.as_bytes())
    }

    /// Write a file at the project root
    pub fn with_asset(self, name: &str, content: &[u8]) -> Self {
        self.write(name, content)
    }

    /// Write `cvbuild.toml`
    pub fn with_config(self, toml: &str) -> Self {
        self.write("cvbuild.toml", toml.as_bytes())
    }

    /// Delete a file created earlier (e.g. to simulate a missing asset)
    pub fn without(self, relative: &str) -> Self {
        fs::remove_file(self.root.join(relative)).expect("Failed to remove fixture file");
        self
    }

    fn write(self, relative: &str, content: &[u8]) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    /// Sorted file names directly inside `<root>/<dir>`
    pub fn list(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(self.root.join(dir)) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}
