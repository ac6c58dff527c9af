//! Compiler-flag provider for semantic C++ completion.
//!
//! An editor plugin host asks this crate which compiler flags to hand a
//! clang-based completion engine when it parses a C++ translation unit.
//! The answer is assembled from configuration and anchored to an absolute
//! location on disk:
//!
//! ```text
//! Config → Assemble → Normalize paths → FlagResolution
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! The host-facing entry point is [`FlagResolver::flags_for_file`].

pub mod config;
pub mod flags;

pub use config::{Config, ConfigError};
pub use flags::{FlagResolution, FlagResolver};
