//! Single-pass snapshot of a project tree.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use walkdir::WalkDir;

use super::patterns::glob_match;
use crate::error::Result;
use crate::model::DirectoryEntry;

/// Key used for the project root in directory listings.
pub const ROOT_KEY: &str = "root";

/// A file seen during the walk
#[derive(Debug)]
pub struct FileEntry {
    /// Absolute or root-joined path for reading
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated
    pub rel_path: String,
    /// File name
    pub name: String,
    pub size_bytes: u64,
    lines: OnceCell<usize>,
}

impl FileEntry {
    fn new(path: PathBuf, rel_path: String, name: String, size_bytes: u64) -> Self {
        Self {
            path,
            rel_path,
            name,
            size_bytes,
            lines: OnceCell::new(),
        }
    }

    /// Lowercased extension with its leading dot
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
    }

    /// Extension exactly as written, with its leading dot
    #[must_use]
    pub fn raw_extension(&self) -> Option<&str> {
        let idx = self.name.rfind('.')?;
        (idx > 0).then(|| &self.name[idx..])
    }

    /// Whether the file name matches a `*` glob
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        glob_match(pattern, &self.name)
    }

    /// Name of the directory directly containing this file
    #[must_use]
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_dirs().last()
    }

    fn parent_dirs(&self) -> impl Iterator<Item = &str> {
        let dirs = self
            .rel_path
            .rsplit_once('/')
            .map_or("", |(dirs, _)| dirs);
        dirs.split('/').filter(|d| !d.is_empty())
    }

    /// Text line count, cached. Unreadable or non-UTF-8 files count 0.
    #[must_use]
    pub fn lines(&self) -> usize {
        *self.lines.get_or_init(|| self.read_text().map_or(0, |t| t.lines().count()))
    }

    /// File contents when readable as UTF-8
    #[must_use]
    pub fn read_text(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("Skipping unreadable file {}: {e}", self.rel_path);
                None
            }
        }
    }
}

/// Files and directory listings gathered in one walk
#[derive(Debug)]
pub struct ProjectTree {
    root: PathBuf,
    files: Vec<FileEntry>,
    directories: IndexMap<String, DirectoryEntry>,
    directory_count: usize,
}

impl ProjectTree {
    /// Walk `root`, skipping directories whose name is in `excluded`.
    ///
    /// Entries below the root that cannot be read are logged and skipped;
    /// an unreadable root is an error. Traversal order is by file name, so
    /// results are stable across runs.
    pub fn scan(root: &Path, excluded: &[String]) -> Result<Self> {
        let mut tree = Self {
            root: root.to_path_buf(),
            files: Vec::new(),
            directories: IndexMap::new(),
            directory_count: 0,
        };
        tree.directories.insert(ROOT_KEY.to_string(), DirectoryEntry::default());

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && excluded.iter().any(|x| e.file_name() == x.as_str()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("Skipping entry during scan: {e}");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let rel_path = relative_key(root, entry.path());
            let parent_key = rel_path
                .rsplit_once('/')
                .map_or_else(|| ROOT_KEY.to_string(), |(parent, _)| parent.to_string());
            let name = entry.file_name().to_string_lossy().to_string();

            if entry.file_type().is_dir() {
                tree.directory_count += 1;
                tree.directories
                    .entry(parent_key)
                    .or_default()
                    .subdirectories
                    .push(name);
                tree.directories.entry(rel_path).or_default();
            } else {
                tree.directories
                    .entry(parent_key)
                    .or_default()
                    .files
                    .push(name.clone());
                let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
                tree.files.push(FileEntry::new(
                    entry.path().to_path_buf(),
                    rel_path,
                    name,
                    size_bytes,
                ));
            }
        }

        tracing::debug!(
            "Scanned {} files in {} directories under {}",
            tree.files.len(),
            tree.directory_count,
            root.display()
        );
        Ok(tree)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All files in walk order
    #[must_use]
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Directory listings keyed by relative path
    #[must_use]
    pub const fn directories(&self) -> &IndexMap<String, DirectoryEntry> {
        &self.directories
    }

    /// Number of directories below the root
    #[must_use]
    pub const fn directory_count(&self) -> usize {
        self.directory_count
    }

    /// Files whose name matches `pattern`, anywhere in the tree
    pub fn matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = &'a FileEntry> + 'a {
        self.files.iter().filter(move |f| f.matches(pattern))
    }

    /// Whether any file matches `pattern`
    #[must_use]
    pub fn any_matching(&self, pattern: &str) -> bool {
        self.files.iter().any(|f| f.matches(pattern))
    }

    /// File at a `/`-separated path relative to the root
    #[must_use]
    pub fn get(&self, rel_path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.rel_path == rel_path)
    }
}

fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_skips_excluded_dirs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "rtl/fifo.sv", "module fifo;\nendmodule\n");
        touch(dir.path(), ".git/config", "[core]\n");
        touch(dir.path(), "my.github/notes.md", "# notes\n");

        let tree = ProjectTree::scan(dir.path(), &[".git".to_string()]).unwrap();
        let paths: Vec<_> = tree.files().iter().map(|f| f.rel_path.as_str()).collect();
        assert_eq!(paths, vec!["my.github/notes.md", "rtl/fifo.sv"]);
        assert_eq!(tree.directory_count(), 2);
        assert_eq!(tree.directories()[ROOT_KEY].subdirectories, vec!["my.github", "rtl"]);
        assert_eq!(tree.directories()["rtl"].files, vec!["fifo.sv"]);
    }

    #[test]
    fn test_line_counting() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.v", "line1\nline2\nline3");
        touch(dir.path(), "b.v", "");
        fs::write(dir.path().join("c.bin"), [0xff, 0xfe, 0x00, 0x0a]).unwrap();

        let tree = ProjectTree::scan(dir.path(), &[]).unwrap();
        assert_eq!(tree.get("a.v").unwrap().lines(), 3);
        assert_eq!(tree.get("b.v").unwrap().lines(), 0);
        assert_eq!(tree.get("c.bin").unwrap().lines(), 0);
    }

    #[test]
    fn test_file_entry_helpers() {
        let entry = FileEntry::new(
            PathBuf::from("/p/verif/test_vectors/case1.txt"),
            "verif/test_vectors/case1.txt".to_string(),
            "case1.txt".to_string(),
            0,
        );
        assert_eq!(entry.parent_name(), Some("test_vectors"));
        assert_eq!(entry.extension().as_deref(), Some(".txt"));

        let upper = FileEntry::new(PathBuf::from("X.SV"), "X.SV".into(), "X.SV".into(), 0);
        assert_eq!(upper.extension().as_deref(), Some(".sv"));
        assert_eq!(upper.raw_extension(), Some(".SV"));

        let dotfile = FileEntry::new(PathBuf::from(".bashrc"), ".bashrc".into(), ".bashrc".into(), 0);
        assert_eq!(dotfile.extension(), None);
        assert_eq!(dotfile.raw_extension(), None);
    }
}
