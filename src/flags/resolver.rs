//! Resolver: ties assembly and normalization together for the plugin host.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::flags::assembler::FlagAssembler;
use crate::flags::normalizer::make_paths_absolute;
use crate::flags::workdir::install_dir;

/// Ready-to-use answer for the plugin host.
#[derive(Debug, Clone, Serialize)]
pub struct FlagResolution {
    /// Compiler flags with every search path absolute.
    pub flags: Vec<String>,
    /// Whether the host may cache this answer for the session. Advisory;
    /// honoring it is the host's business, not ours.
    pub do_cache: bool,
}

/// Per-session flag provider.
///
/// Construction fixes the static flag list; each [`flags_for_file`] call
/// produces a fresh [`FlagResolution`] from it. Stateless after
/// construction, so calls are independent and side-effect-free.
///
/// [`flags_for_file`]: FlagResolver::flags_for_file
#[derive(Debug, Clone)]
pub struct FlagResolver {
    flags: Vec<String>,
    working_directory: Option<PathBuf>,
    source_extensions: Vec<String>,
}

impl FlagResolver {
    /// Build a resolver anchored at the installation directory.
    pub fn new(config: &Config) -> Self {
        let working_directory = install_dir();
        if working_directory.is_none() {
            tracing::warn!("Installation directory unknown; relative include paths stay relative");
        }

        Self {
            flags: FlagAssembler::from_config(config).build(),
            working_directory,
            source_extensions: config.files.source_extensions.clone(),
        }
    }

    /// Anchor relative paths at `path` instead of the installation directory.
    pub fn with_working_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(path.into());
        self
    }

    /// Produce the flags for one file.
    ///
    /// This is the call the editor plugin host makes. `filename` is part of
    /// the host contract but does not influence the answer yet; it is kept
    /// for per-file customization later. `_extra` is an opaque payload some
    /// hosts attach and is discarded, also purely for contract compatibility.
    /// The call never fails: malformed flag sequences pass through
    /// best-effort rather than being rejected.
    pub fn flags_for_file(
        &self,
        filename: &Path,
        _extra: Option<&serde_json::Value>,
    ) -> FlagResolution {
        if let Some(ext) = dot_extension(filename) {
            if !self.source_extensions.iter().any(|e| *e == ext) {
                tracing::debug!(
                    "{}: not a recognized translation unit, serving header flags",
                    filename.display()
                );
            }
        }

        let flags = match &self.working_directory {
            Some(dir) => make_paths_absolute(&self.flags, dir),
            None => self.flags.clone(),
        };

        tracing::debug!("Resolved {} flags for {}", flags.len(), filename.display());

        FlagResolution {
            flags,
            do_cache: true,
        }
    }

    /// The static flag list, before path normalization.
    pub fn static_flags(&self) -> &[String] {
        &self.flags
    }

    /// The anchor for relative-path resolution, if one was found.
    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }
}

/// Extension of `path` with its leading dot, as configured extensions carry.
fn dot_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
}
