use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use crudkit_core::{
    error::{StoreError, StoreResult},
    store::IndexedStore,
};

/// Index-addressed store over a line-oriented text file.
///
/// One item per line. Updates and deletes rewrite the whole file; reads go to
/// disk every time, so concurrent external edits are picked up on the next
/// operation.
#[derive(Debug, Clone)]
pub struct LineStore {
    path: PathBuf,
}

impl LineStore {
    /// Opens a line store at `path`, creating an empty file when none exists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            File::create(&path)?;
        }
        Ok(Self { path })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reports whether the backing file currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_lines(&self) -> StoreResult<Vec<String>> {
        let file = File::open(&self.path)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()?;
        Ok(lines)
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        let mut file = File::create(&self.path)?;
        for line in lines {
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        Ok(())
    }
}

impl IndexedStore<String> for LineStore {
    fn create(&self, item: String) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{item}")?;
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<String>> {
        self.read_lines()
    }

    fn update(&self, index: usize, item: String) -> StoreResult<()> {
        let mut lines = self.read_lines()?;
        let len = lines.len();
        match lines.get_mut(index) {
            Some(slot) => *slot = item,
            None => return Err(StoreError::IndexOutOfRange { index, len }),
        }
        self.write_lines(&lines)
    }

    fn delete(&self, index: usize) -> StoreResult<()> {
        let mut lines = self.read_lines()?;
        if index >= lines.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: lines.len(),
            });
        }
        lines.remove(index);
        self.write_lines(&lines)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read_lines()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> LineStore {
        LineStore::open(dir.path().join("lines.txt")).unwrap()
    }

    #[test]
    fn test_open_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.exists());
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn test_create_appends_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.create("first".to_string()).unwrap();
        store.create("second".to_string()).unwrap();

        assert_eq!(store.read_all().unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_update_rewrites_single_line() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.create("first".to_string()).unwrap();
        store.create("second".to_string()).unwrap();

        store.update(0, "revised".to_string()).unwrap();
        assert_eq!(store.read_all().unwrap(), ["revised", "second"]);
    }

    #[test]
    fn test_update_out_of_range_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.create("only".to_string()).unwrap();

        assert!(matches!(
            store.update(3, "x".to_string()),
            Err(StoreError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(store.read_all().unwrap(), ["only"]);
    }

    #[test]
    fn test_delete_removes_line_and_shifts_rest() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        for line in ["a", "b", "c"] {
            store.create(line.to_string()).unwrap();
        }

        store.delete(1).unwrap();
        assert_eq!(store.read_all().unwrap(), ["a", "c"]);
    }

    #[test]
    fn test_delete_out_of_range_fails() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(matches!(
            store.delete(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        std::fs::remove_file(store.path()).unwrap();

        assert!(matches!(store.read_all(), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_reopen_sees_existing_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lines.txt");
        {
            let store = LineStore::open(&path).unwrap();
            store.create("persisted".to_string()).unwrap();
        }
        let reopened = LineStore::open(&path).unwrap();
        assert_eq!(reopened.read_all().unwrap(), ["persisted"]);
    }
}
