mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CompilerConfig, Config, FileConfig, IncludeConfig};
