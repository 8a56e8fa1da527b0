//! Ordered directory walking
//!
//! Within every directory, files are yielded before subdirectories and each
//! group is sorted by file name, so two walks over the same tree agree.

use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Build a depth-first walk over `root` in report order
pub fn ordered_walk(root: &Path) -> WalkDir {
    WalkDir::new(root).sort_by(report_order)
}

fn report_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Whether an entry is a directory or a symlink to one (neither is read as a file)
pub fn is_directory_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || entry.path().is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn relative_paths(root: &Path) -> Vec<String> {
        ordered_walk(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.depth() > 0)
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_files_before_directories() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("a_dir")).unwrap();
        fs::write(temp.path().join("a_dir/inner.txt"), "x").unwrap();
        fs::write(temp.path().join("z.txt"), "z").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();

        assert_eq!(
            relative_paths(temp.path()),
            vec!["b.txt", "z.txt", "a_dir", "a_dir/inner.txt"]
        );
    }

    #[test]
    fn test_nested_order_is_stable() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("b/c")).unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("b/c/deep.txt"), "d").unwrap();
        fs::write(temp.path().join("b/file.txt"), "f").unwrap();
        fs::write(temp.path().join("a/x.txt"), "x").unwrap();

        let first = relative_paths(temp.path());
        assert_eq!(
            first,
            vec!["a", "a/x.txt", "b", "b/file.txt", "b/c", "b/c/deep.txt"]
        );
        assert_eq!(first, relative_paths(temp.path()));
    }

    #[test]
    fn test_is_directory_like() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("f.txt"), "f").unwrap();

        let entries: Vec<_> = ordered_walk(temp.path())
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .collect();

        assert!(!is_directory_like(&entries[0]));
        assert!(is_directory_like(&entries[1]));
    }
}
