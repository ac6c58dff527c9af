//! Installation-directory lookup.

use std::env;
use std::path::PathBuf;

/// Return the directory the host executable lives in.
///
/// This anchors relative include paths when the host does not supply a
/// working directory of its own. `None` when the executable path cannot be
/// determined; callers then skip path normalization.
pub fn install_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    exe.parent().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::install_dir;

    #[test]
    fn install_dir_is_an_absolute_directory() {
        // Under the test harness current_exe always resolves.
        let dir = install_dir().expect("test binary has a path");
        assert!(dir.is_absolute());
    }
}
