//! On-disk budget class store
//!
//! Each budget class lives in its own JSON file under the save directory,
//! named by [`BudgetClass::file_name`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::{SbError, SbResult};
use crate::models::BudgetClass;

use super::file_io::{to_pretty_json, write_json_atomic};

/// Outcome of [`ClassStore::sync`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// File names written because they did not exist
    pub created: Vec<String>,
    /// File names that were already present and left alone
    pub existing: Vec<String>,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}

/// Persists budget classes into a single save directory
pub struct ClassStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl ClassStore {
    /// Bind a store to `dir`, creating the directory if it is missing
    ///
    /// Only the final path component is created; a missing parent is an
    /// I/O error. Fails with `InvalidPath` if `dir` exists but is not a
    /// directory.
    pub fn open<P: Into<PathBuf>>(dir: P) -> SbResult<Self> {
        let dir = dir.into();

        if dir.exists() {
            if !dir.is_dir() {
                return Err(SbError::InvalidPath(format!(
                    "save location {} exists and is not a directory",
                    dir.display()
                )));
            }
            debug!(dir = %dir.display(), "using existing save directory");
        } else {
            fs::create_dir(&dir).map_err(|e| {
                SbError::Io(format!(
                    "Failed to create save directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            info!(dir = %dir.display(), "created save directory");
        }

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// The directory this store writes to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file `class` is stored in
    pub fn class_path(&self, class: &BudgetClass) -> PathBuf {
        self.dir.join(class.file_name())
    }

    /// Whether a file for `class` is present
    pub fn exists(&self, class: &BudgetClass) -> bool {
        self.class_path(class).exists()
    }

    /// Write `class` to its file, replacing whatever was there
    pub fn write(&self, class: &BudgetClass) -> SbResult<()> {
        let path = self.class_path(class);

        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| SbError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        write_json_atomic(&path, class)?;
        debug!(class = class.name(), path = %path.display(), "wrote budget class");
        Ok(())
    }

    /// Write every class, overwriting existing files
    pub fn write_all(&self, classes: &[BudgetClass]) -> SbResult<()> {
        for class in classes {
            self.write(class)?;
        }
        Ok(())
    }

    /// Write only the classes that have no file yet
    pub fn sync(&self, classes: &[BudgetClass]) -> SbResult<SyncReport> {
        let mut report = SyncReport::default();

        for class in classes {
            if self.exists(class) {
                report.existing.push(class.file_name());
            } else {
                self.write(class)?;
                report.created.push(class.file_name());
            }
        }

        info!(
            dir = %self.dir.display(),
            created = report.created.len(),
            existing = report.existing.len(),
            "synced budget classes"
        );
        Ok(report)
    }

    /// The exact bytes [`ClassStore::write`] produces for `class`
    pub fn render(class: &BudgetClass) -> SbResult<Vec<u8>> {
        to_pretty_json(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetClassType;
    use tempfile::TempDir;

    fn groceries() -> BudgetClass {
        BudgetClass::new("Groceries", BudgetClassType::Expense, "food", ["store", "market"])
    }

    fn paycheck() -> BudgetClass {
        BudgetClass::new("Pay Check", BudgetClassType::Income, "salary", ["employer"])
    }

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("classes");

        let store = ClassStore::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_open_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("classes");

        ClassStore::open(&dir).unwrap();
        ClassStore::open(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_open_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("classes");
        fs::write(&file, "not a directory").unwrap();

        for _ in 0..2 {
            let err = ClassStore::open(&file).err().unwrap();
            assert!(err.is_invalid_path());
        }
    }

    #[test]
    fn test_open_does_not_create_parents() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("b");

        let err = ClassStore::open(&dir).err().unwrap();
        assert!(matches!(err, SbError::Io(_)));
        assert!(!temp_dir.path().join("a").exists());
    }

    #[test]
    fn test_write_then_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = ClassStore::open(temp_dir.path()).unwrap();
        let class = groceries();

        assert!(!store.exists(&class));
        store.write(&class).unwrap();
        assert!(store.exists(&class));
        assert_eq!(store.class_path(&class), temp_dir.path().join("groceries.json"));
    }

    #[test]
    fn test_written_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = ClassStore::open(temp_dir.path()).unwrap();
        store.write(&groceries()).unwrap();

        let text = fs::read_to_string(temp_dir.path().join("groceries.json")).unwrap();
        let expected = concat!(
            "{\n",
            "    \"name\": \"Groceries\",\n",
            "    \"type\": \"expense\",\n",
            "    \"description\": \"food\",\n",
            "    \"keywords\": [\n",
            "        \"store\",\n",
            "        \"market\"\n",
            "    ]\n",
            "}"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = ClassStore::open(temp_dir.path()).unwrap();
        let class = groceries();
        let path = store.class_path(&class);

        store.write(&class).unwrap();
        let first = fs::read(&path).unwrap();
        store.write(&class).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, ClassStore::render(&class).unwrap());
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = ClassStore::open(temp_dir.path()).unwrap();
        let class = groceries();
        fs::write(store.class_path(&class), "{\"stale\": true}").unwrap();

        store.write(&class).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(store.class_path(&class)).unwrap()).unwrap();
        assert_eq!(value, class.to_json());
    }

    #[test]
    fn test_sync_only_writes_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = ClassStore::open(temp_dir.path()).unwrap();
        let existing = groceries();
        fs::write(store.class_path(&existing), "hand edited").unwrap();

        let report = store.sync(&[existing.clone(), paycheck()]).unwrap();
        assert_eq!(report.created, vec!["pay_check.json"]);
        assert_eq!(report.existing, vec!["groceries.json"]);
        assert_eq!(report.total(), 2);

        let untouched = fs::read_to_string(store.class_path(&existing)).unwrap();
        assert_eq!(untouched, "hand edited");
    }

    #[test]
    fn test_write_all_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = ClassStore::open(temp_dir.path()).unwrap();
        let class = groceries();
        fs::write(store.class_path(&class), "hand edited").unwrap();

        store.write_all(&[class.clone(), paycheck()]).unwrap();
        assert_eq!(
            fs::read(store.class_path(&class)).unwrap(),
            ClassStore::render(&class).unwrap()
        );
        assert!(store.exists(&paycheck()));
    }
}
