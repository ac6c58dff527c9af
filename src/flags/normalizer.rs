//! Path normalization pass over an assembled flag list.

use std::path::Path;

use crate::flags::registry::path_flag_registry;

/// Rewrite every relative include/search path in `flags` as an absolute path
/// anchored at `working_directory`.
///
/// The scan is a single left-to-right pass. A bare path marker arms a
/// pending state and the next token is consumed as its value; an attached
/// marker (`-Isrc`, `--sysroot=lib`) is split and rejoined in place. Tokens
/// that are already absolute, and every non-path token, pass through
/// byte-identical. The output always has the same length and order as the
/// input, and the pass never fails: a trailing marker with no value is
/// emitted as-is rather than rejected.
///
/// An empty `working_directory` disables the pass entirely and returns the
/// input unchanged.
pub fn make_paths_absolute(flags: &[String], working_directory: &Path) -> Vec<String> {
    if working_directory.as_os_str().is_empty() {
        return flags.to_vec();
    }

    let registry = path_flag_registry();
    let mut new_flags = Vec::with_capacity(flags.len());
    let mut make_next_absolute = false;

    for flag in flags {
        if make_next_absolute {
            make_next_absolute = false;
            new_flags.push(absolutize(flag, working_directory));
            continue;
        }

        if let Some(def) = registry.iter().find(|d| d.matches_bare(flag)) {
            // Value arrives in the next token.
            tracing::trace!("{}: value pending", def.description);
            make_next_absolute = true;
            new_flags.push(flag.clone());
            continue;
        }

        if let Some((def, path)) = registry
            .iter()
            .find_map(|d| d.split_attached(flag).map(|p| (d, p)))
        {
            tracing::trace!("{}: anchoring attached value '{}'", def.description, path);
            new_flags.push(format!("{}{}", def.prefix, absolutize(path, working_directory)));
            continue;
        }

        new_flags.push(flag.clone());
    }

    new_flags
}

/// Join `path` onto `working_directory` unless it is already absolute.
fn absolutize(path: &str, working_directory: &Path) -> String {
    if Path::new(path).is_absolute() {
        path.to_string()
    } else {
        working_directory.join(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::make_paths_absolute;
    use std::path::Path;

    fn flags(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn relative_include_is_anchored() {
        let out = make_paths_absolute(&flags(&["-I", "src"]), Path::new("/proj"));
        assert_eq!(out, flags(&["-I", "/proj/src"]));
    }

    #[test]
    fn absolute_include_is_untouched() {
        let out = make_paths_absolute(&flags(&["-isystem", "/usr/include"]), Path::new("/proj"));
        assert_eq!(out, flags(&["-isystem", "/usr/include"]));
    }

    #[test]
    fn attached_sysroot_is_rewritten() {
        let out = make_paths_absolute(&flags(&["--sysroot=lib"]), Path::new("/proj"));
        assert_eq!(out, flags(&["--sysroot=/proj/lib"]));
    }

    #[test]
    fn attached_include_is_rewritten() {
        let out = make_paths_absolute(&flags(&["-Isrc"]), Path::new("/proj"));
        assert_eq!(out, flags(&["-I/proj/src"]));
    }

    #[test]
    fn attached_absolute_value_is_untouched() {
        let out = make_paths_absolute(&flags(&["--sysroot=/opt/root"]), Path::new("/proj"));
        assert_eq!(out, flags(&["--sysroot=/opt/root"]));
    }

    #[test]
    fn non_path_tokens_pass_through() {
        let input = flags(&["-std=c++11", "-Wall", "-x", "c++"]);
        let out = make_paths_absolute(&input, Path::new("/proj"));
        assert_eq!(out, input);
    }

    #[test]
    fn empty_working_directory_is_identity() {
        let input = flags(&["-I", "src", "--sysroot=lib"]);
        let out = make_paths_absolute(&input, Path::new(""));
        assert_eq!(out, input);
    }

    #[test]
    fn trailing_marker_without_value_is_kept() {
        let out = make_paths_absolute(&flags(&["-Wall", "-I"]), Path::new("/proj"));
        assert_eq!(out, flags(&["-Wall", "-I"]));
    }

    #[test]
    fn output_preserves_length_and_order() {
        let input = flags(&["-Wall", "-I", "src", "-isystem", "/usr/include", "-fexceptions"]);
        let out = make_paths_absolute(&input, Path::new("/proj"));
        assert_eq!(out.len(), input.len());
        assert_eq!(out[0], "-Wall");
        assert_eq!(out[5], "-fexceptions");
    }
}
