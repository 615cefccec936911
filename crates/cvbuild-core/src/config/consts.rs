//! Fixed names shared by the build pipeline

/// Config file looked up in the project root
pub const CONFIG_FILE: &str = "cvbuild.toml";

/// Key injected into every template context
pub const LANG_KEY: &str = "lang";

/// Extension of the files kept in the build directory after cleanup
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Environment overrides for toolchain programs
pub mod env {
    pub const PDFLATEX: &str = "CVBUILD_PDFLATEX";
    pub const BIBER: &str = "CVBUILD_BIBER";
}

/// LaTeX-safe template delimiters
pub mod syntax {
    pub const BLOCK_START: &str = "((*";
    pub const BLOCK_END: &str = "*))";
    pub const VARIABLE_START: &str = "(((";
    pub const VARIABLE_END: &str = ")))";
    pub const COMMENT_START: &str = "((#";
    pub const COMMENT_END: &str = "#))";
}
