pub mod consts;
pub mod model;

pub use model::{AssetsConfig, Config, PathsConfig, TemplatesConfig, ToolchainConfig};
