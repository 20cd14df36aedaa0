use std::path::{Path, PathBuf};

use campus_config::PROJECT_DIR;

/// Nearest ancestor of `start` (itself included) holding a `.campus` directory.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::find_project_root;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".campus")).unwrap();
        temp
    }

    #[test]
    fn nested_directory_resolves_to_project() {
        let temp = project();
        let nested = temp.path().join("exports/2026/march");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).as_deref(), Some(temp.path()));
        assert_eq!(find_project_root(temp.path()).as_deref(), Some(temp.path()));
    }

    #[test]
    fn campus_file_is_not_a_project() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".campus"), "not a directory").unwrap();

        assert!(find_project_root(temp.path()).is_none());
    }
}
