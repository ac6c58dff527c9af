//! Path-flag registry: the markers whose values are filesystem paths.

/// A single path-flag definition.
///
/// Every marker is recognized in two shapes: bare (`-I src`, value in the
/// next token) and attached (`-Isrc` or `--sysroot=lib`, value glued to the
/// marker). A token that merely begins with a marker string is treated as
/// that flag; this matches what clang itself accepts for these options.
#[derive(Debug, Clone)]
pub struct PathFlagDef {
    /// Marker text (e.g. "-isystem").
    pub prefix: &'static str,
    /// Human-readable description (for logs).
    pub description: &'static str,
}

/// Build the complete path-flag registry. Order matters: earlier entries win
/// when matching attached forms.
pub fn path_flag_registry() -> Vec<PathFlagDef> {
    vec![
        PathFlagDef {
            prefix: "-isystem",
            description: "System include search path",
        },
        PathFlagDef {
            prefix: "-I",
            description: "Include search path",
        },
        PathFlagDef {
            prefix: "-iquote",
            description: "Quote-form include search path",
        },
        PathFlagDef {
            prefix: "--sysroot=",
            description: "Compiler sysroot",
        },
    ]
}

impl PathFlagDef {
    /// Check if `token` is exactly this marker (value arrives next).
    pub fn matches_bare(&self, token: &str) -> bool {
        token == self.prefix
    }

    /// If `token` is the attached form of this marker, return its path
    /// suffix. The bare form is not an attached match.
    pub fn split_attached<'a>(&self, token: &'a str) -> Option<&'a str> {
        if token.len() > self.prefix.len() {
            token.strip_prefix(self.prefix)
        } else {
            None
        }
    }
}
