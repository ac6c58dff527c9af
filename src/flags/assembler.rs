//! Flag assembler: configuration in, ordered argument list out.

use crate::config::Config;

/// Builder for the static flag list handed to the completion engine.
///
/// Emission order is fixed: warnings, `-fexceptions`, defines, `-std=`,
/// `-x`, `--sysroot=`, quote/project/system include pairs, extra flags.
/// Order is semantically significant downstream; bare include markers and
/// their values are consumed pairwise by the normalization pass.
#[derive(Debug, Clone)]
pub struct FlagAssembler {
    flags: Vec<String>,
}

impl FlagAssembler {
    /// Start with an empty flag list.
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Assemble the full list from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_warnings(config)
            .with_dialect(config)
            .with_sysroot(config)
            .with_includes(config)
            .with_extra(config.compiler.extra_flags.clone())
    }

    /// Warning and diagnostics flags, verbatim.
    pub fn with_warnings(mut self, config: &Config) -> Self {
        self.flags.extend(config.compiler.warnings.iter().cloned());
        if config.compiler.exceptions {
            self.flags.push("-fexceptions".into());
        }
        for define in &config.compiler.defines {
            self.flags.push(format!("-D{define}"));
        }
        self
    }

    /// Language standard and source language.
    pub fn with_dialect(mut self, config: &Config) -> Self {
        self.flags.push(format!("-std={}", config.compiler.std));
        self.flags.push("-x".into());
        self.flags.push(config.compiler.language.clone());
        self
    }

    /// Sysroot in attached form, when configured.
    pub fn with_sysroot(mut self, config: &Config) -> Self {
        if let Some(sysroot) = &config.compiler.sysroot {
            self.flags.push(format!("--sysroot={sysroot}"));
        }
        self
    }

    /// Include search paths as marker/value pairs.
    pub fn with_includes(mut self, config: &Config) -> Self {
        for dir in &config.include.quote {
            self.flags.push("-iquote".into());
            self.flags.push(dir.clone());
        }
        for dir in &config.include.project {
            self.flags.push("-I".into());
            self.flags.push(dir.clone());
        }
        for dir in &config.include.system {
            self.flags.push("-isystem".into());
            self.flags.push(dir.clone());
        }
        self
    }

    /// Add arbitrary extra flags.
    pub fn with_extra(mut self, extra: Vec<String>) -> Self {
        self.flags.extend(extra);
        self
    }

    /// Build the final flag list.
    pub fn build(self) -> Vec<String> {
        self.flags
    }
}

impl Default for FlagAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::FlagAssembler;
    use crate::config::Config;

    #[test]
    fn default_config_assembles_builtin_list() {
        let flags = FlagAssembler::from_config(&Config::default()).build();
        assert_eq!(
            flags,
            vec![
                "-Wall",
                "-Wextra",
                "-Werror",
                "-Wno-long-long",
                "-Wno-variadic-macros",
                "-fexceptions",
                "-std=c++11",
                "-x",
                "c++",
                "-I",
                "src",
                "-isystem",
                "/usr/include/c++/6",
                "-isystem",
                "/usr/include/c++/6/backward",
                "-isystem",
                "/usr/lib/clang/3.8.1/include",
                "-isystem",
                "/usr/include",
                "-isystem",
                "/usr/local/include",
            ]
        );
    }

    #[test]
    fn defines_and_sysroot_are_emitted() {
        let mut config = Config::default();
        config.compiler.defines = vec!["NDEBUG".into()];
        config.compiler.sysroot = Some("toolchain/root".into());

        let flags = FlagAssembler::from_config(&config).build();
        assert!(flags.contains(&"-DNDEBUG".to_string()));
        assert!(flags.contains(&"--sysroot=toolchain/root".to_string()));
    }

    #[test]
    fn extra_flags_come_last() {
        let mut config = Config::default();
        config.compiler.extra_flags = vec!["-pthread".into()];

        let flags = FlagAssembler::from_config(&config).build();
        assert_eq!(flags.last().map(String::as_str), Some("-pthread"));
    }

    #[test]
    fn disabled_exceptions_are_omitted() {
        let mut config = Config::default();
        config.compiler.exceptions = false;

        let flags = FlagAssembler::from_config(&config).build();
        assert!(!flags.contains(&"-fexceptions".to_string()));
    }
}
