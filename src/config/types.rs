use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,
    #[serde(default)]
    pub include: IncludeConfig,
    #[serde(default)]
    pub files: FileConfig,
}

/// Compiler dialect and diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Language standard passed as `-std=<std>`. Without a `-std=` flag clang
    /// cannot tell which dialect to use when parsing headers.
    #[serde(default = "default_std")]
    pub std: String,
    /// Source language passed as `-x <language>`, mostly relevant for
    /// headers. A C project would set this to `c` and `std` to e.g. `c99`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Emit `-fexceptions` (default: true).
    #[serde(default = "default_exceptions")]
    pub exceptions: bool,
    /// Warning flags, emitted verbatim ahead of everything else.
    #[serde(default = "default_warnings")]
    pub warnings: Vec<String>,
    /// Preprocessor defines, emitted as `-D<define>`.
    #[serde(default)]
    pub defines: Vec<String>,
    /// Optional sysroot, emitted as `--sysroot=<path>`.
    #[serde(default)]
    pub sysroot: Option<String>,
    /// Escape hatch: flags appended verbatim after everything else.
    #[serde(default)]
    pub extra_flags: Vec<String>,
}

/// Include search paths. Relative entries are resolved against the
/// working directory during normalization, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludeConfig {
    /// Project include dirs, emitted as `-I <dir>`.
    #[serde(default = "default_project_includes")]
    pub project: Vec<String>,
    /// System include dirs, emitted as `-isystem <dir>`.
    #[serde(default = "default_system_includes")]
    pub system: Vec<String>,
    /// Quote-form include dirs, emitted as `-iquote <dir>`.
    #[serde(default)]
    pub quote: Vec<String>,
}

/// Source file recognition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Extensions (with leading dot) treated as C/C++ translation units.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

fn default_std() -> String {
    "c++11".to_string()
}

fn default_language() -> String {
    "c++".to_string()
}

fn default_exceptions() -> bool {
    true
}

fn default_warnings() -> Vec<String> {
    [
        "-Wall",
        "-Wextra",
        "-Werror",
        "-Wno-long-long",
        "-Wno-variadic-macros",
    ]
    .map(String::from)
    .to_vec()
}

fn default_project_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_system_includes() -> Vec<String> {
    [
        "/usr/include/c++/6",
        "/usr/include/c++/6/backward",
        "/usr/lib/clang/3.8.1/include",
        "/usr/include",
        "/usr/local/include",
    ]
    .map(String::from)
    .to_vec()
}

fn default_source_extensions() -> Vec<String> {
    [".cpp", ".cxx", ".cc", ".c"].map(String::from).to_vec()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            std: default_std(),
            language: default_language(),
            exceptions: default_exceptions(),
            warnings: default_warnings(),
            defines: Vec::new(),
            sysroot: None,
            extra_flags: Vec::new(),
        }
    }
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            project: default_project_includes(),
            system: default_system_includes(),
            quote: Vec::new(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compiler: CompilerConfig::default(),
            include: IncludeConfig::default(),
            files: FileConfig::default(),
        }
    }
}

