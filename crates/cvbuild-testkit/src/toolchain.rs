//! Fake `pdflatex` / `biber` executables
//!
//! The scripts append one line per invocation (`<tool> <cwd> <args>`) to a
//! shared trace file so tests can assert on order, working directory and
//! arguments. pdflatex writes `<job>.aux` and, unless disabled, `<job>.pdf`
//! into its working directory; biber writes `<target>.bbl`. `--version` is
//! answered without being recorded.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Behaviour of one fake tool
#[derive(Debug, Clone, Copy)]
pub struct FakeTool {
    /// 1-based call number that fails (0 = never fails)
    pub fail_on_call: usize,
    /// Exit status used for the failing call
    pub exit_code: i32,
    /// pdflatex only: whether a PDF is produced
    pub produce_pdf: bool,
}

impl Default for FakeTool {
    fn default() -> Self {
        Self {
            fail_on_call: 0,
            exit_code: 0,
            produce_pdf: true,
        }
    }
}

impl FakeTool {
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Fail with `exit_code` on the `call`-th invocation
    pub fn failing_on(call: usize, exit_code: i32) -> Self {
        Self {
            fail_on_call: call,
            exit_code,
            produce_pdf: true,
        }
    }

    /// Succeed without writing a PDF
    pub fn without_pdf() -> Self {
        Self {
            produce_pdf: false,
            ..Self::default()
        }
    }
}

/// A directory with executable fake `pdflatex` and `biber` scripts
pub struct FakeToolchain {
    dir: PathBuf,
    trace: PathBuf,
}

impl FakeToolchain {
    /// Install both scripts into `dir`
    pub fn install(dir: impl Into<PathBuf>, pdflatex: FakeTool, biber: FakeTool) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).expect("Failed to create fake toolchain dir");
        let trace = dir.join("trace.txt");

        let toolchain = Self { dir, trace };
        toolchain.write_script("pdflatex", &pdflatex_script(&toolchain.trace, pdflatex));
        toolchain.write_script("biber", &biber_script(&toolchain.trace, biber));
        toolchain
    }

    /// Both tools succeed and pdflatex produces the PDF
    pub fn succeeding(dir: impl Into<PathBuf>) -> Self {
        Self::install(dir, FakeTool::succeeding(), FakeTool::succeeding())
    }

    pub fn pdflatex(&self) -> PathBuf {
        self.dir.join("pdflatex")
    }

    pub fn biber(&self) -> PathBuf {
        self.dir.join("biber")
    }

    /// Environment pairs pointing cvbuild at these scripts
    pub fn env(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            ("CVBUILD_PDFLATEX", self.pdflatex()),
            ("CVBUILD_BIBER", self.biber()),
        ]
    }

    /// Recorded invocations, one per line
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.trace)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Tool names in invocation order, e.g. `["pdflatex", "biber", ...]`
    pub fn tool_sequence(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    fn write_script(&self, name: &str, body: &str) {
        let path = self.dir.join(name);
        fs::write(&path, body).expect("Failed to write fake tool");
        let mut perms = fs::metadata(&path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }
}

fn pdflatex_script(trace: &Path, tool: FakeTool) -> String {
    let pdf_line = if tool.produce_pdf {
        "echo '%PDF-1.5' > \"$job.pdf\"\n"
    } else {
        ""
    };

    format!(
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "pdfTeX 3.141592653-2.6-1.40.25 (fake)"
  exit 0
fi
echo "pdflatex $(pwd) $*" >> '{trace}'
count=$(grep -c '^pdflatex ' '{trace}')
echo "This is fake pdflatex, run $count"
echo "LaTeX Warning: fake warning on stderr" >&2
if [ "$count" = "{fail_on}" ]; then
  echo "! LaTeX Error: fake failure" >&2
  exit {code}
fi
for last; do :; done
job="${{last%.tex}}"
echo aux > "$job.aux"
{pdf_line}exit 0
"#,
        trace = trace.display(),
        fail_on = tool.fail_on_call,
        code = tool.exit_code,
        pdf_line = pdf_line,
    )
}

fn biber_script(trace: &Path, tool: FakeTool) -> String {
    format!(
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "biber version: 2.19 (fake)"
  exit 0
fi
echo "biber $(pwd) $*" >> '{trace}'
count=$(grep -c '^biber ' '{trace}')
echo "INFO - This is fake biber, run $count"
if [ "$count" = "{fail_on}" ]; then
  echo "ERROR - fake failure" >&2
  exit {code}
fi
echo bbl > "$1.bbl"
exit 0
"#,
        trace = trace.display(),
        fail_on = tool.fail_on_call,
        code = tool.exit_code,
    )
}
