//! Flag pipeline: configuration in, completion-ready compiler flags out.
//!
//! ```text
//! Config → Assemble → Normalize paths → FlagResolution
//! ```
//!
//! Assembly turns the configuration into an ordered argument list; path
//! normalization rewrites every relative include/search path against the
//! resolver's working directory so the completion engine sees only absolute
//! paths, whatever its own current directory happens to be.

mod assembler;
mod normalizer;
mod registry;
mod resolver;
mod workdir;

pub use assembler::FlagAssembler;
pub use normalizer::make_paths_absolute;
pub use registry::{path_flag_registry, PathFlagDef};
pub use resolver::{FlagResolution, FlagResolver};
pub use workdir::install_dir;
