//! # File I/O Module
//!
//! Native persistence for the key-value store:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: One process writes a store at a time
//! - **Exports**: `timeline.json` and other downloads go through the same atomic write
//!
//! ## File Format
//!
//! The store is a single JSON object mapping each storage key to its serialized
//! value (itself a JSON document stored as a string, exactly as the browser's
//! `localStorage` would hold it). The lock file sits next to it with a
//! `.json.lock` extension and records who holds it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use casefile_core::file_io::FileStore;
//! use casefile_core::store::KeyValueStore;
//! use std::path::Path;
//!
//! let mut store = FileStore::open(Path::new("casefile.json"), "reader@example.com")?;
//! store.set("quotesData", "[]")?;
//! // Lock is released when the store is dropped
//! drop(store);
//! # Ok::<(), casefile_core::errors::CaseError>(())
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CaseError, CaseResult};
use crate::store::KeyValueStore;

/// Who holds a store, as recorded in its `.lock` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    pub user_id: String,
    pub machine: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    fn current(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// The holder has exited (checked on this machine only) or the lock is over a day old
    fn is_stale(&self) -> bool {
        let same_machine = hostname().is_some_and(|m| m == self.machine);
        if same_machine && process_alive(self.pid) == Some(false) {
            return true;
        }
        (Utc::now() - self.locked_at).num_hours() > STALE_LOCK_HOURS
    }

    fn holder(&self) -> String {
        format!("{} ({})", self.user_id, self.machine)
    }
}

const STALE_LOCK_HOURS: i64 = 24;

fn hostname() -> Option<String> {
    ["HOSTNAME", "HOST", "COMPUTERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
}

/// `None` where liveness cannot be checked cheaply
fn process_alive(pid: u32) -> Option<bool> {
    if cfg!(target_os = "linux") {
        Some(Path::new(&format!("/proc/{}", pid)).exists())
    } else {
        None
    }
}

/// Map an `io::Error` on `path` into a [`CaseError::FileError`]
fn io_error<'a>(operation: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> CaseError + 'a {
    move |e| CaseError::file_error(operation, path.display().to_string(), e.to_string())
}

/// Exclusive hold on a store file, released on drop.
///
/// The OS lock (fs2) guards against a concurrent writer; the JSON body of the
/// `.lock` file lets a refused process report who holds the store.
pub struct FileLock {
    lock_path: PathBuf,
    _handle: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire the lock for `path`, taking over a stale one.
    ///
    /// Fails with `CaseError::FileLocked` while another live process holds it.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CaseResult<Self> {
        let lock_path = lock_path_for(path);

        if let Some(existing) = read_lock_info(&lock_path) {
            if !existing.is_stale() {
                return Err(CaseError::file_locked(
                    path.display().to_string(),
                    existing.holder(),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            log::info!("Taking over stale lock on {} from {}", path.display(), existing.holder());
        }

        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(io_error("create lock", &lock_path))?;
        handle
            .try_lock_exclusive()
            .map_err(|_| CaseError::file_locked(path.display().to_string(), "another process", "unknown"))?;

        let info = LockInfo::current(user_id);
        handle
            .write_all(serde_json::to_string_pretty(&info)?.as_bytes())
            .and_then(|_| handle.sync_all())
            .map_err(io_error("write lock", &lock_path))?;

        Ok(FileLock {
            lock_path,
            _handle: handle,
            info,
        })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `casefile.json` -> `casefile.json.lock`
fn lock_path_for(path: &Path) -> PathBuf {
    sibling_with_suffix(path, ".lock")
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Unreadable or malformed lock files are treated as absent
fn read_lock_info(lock_path: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Replace `path` with `contents` so readers see either the old or the new file.
///
/// The data goes to `<name>.tmp`, is synced, then renamed over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> CaseResult<()> {
    let tmp_path = sibling_with_suffix(path, ".tmp");

    File::create(&tmp_path)
        .and_then(|mut tmp| {
            tmp.write_all(contents.as_bytes())?;
            tmp.sync_all()
        })
        .map_err(io_error("write temp file", &tmp_path))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_error("rename to final", path)(e)
    })
}

/// Key-value store persisted as one JSON file.
///
/// The whole map is held in memory and rewritten atomically on every `set`
/// or `remove`, so the file always matches the last successful mutation.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    lock: FileLock,
}

impl FileStore {
    /// Open (or create) the store at `path`, taking the single-writer lock.
    ///
    /// Parent directories are created as needed. A missing file opens as an
    /// empty store; it is written on the first `set`.
    ///
    /// # Returns
    ///
    /// * `Err(CaseError::FileLocked)` - Another process has the store open
    /// * `Err(CaseError::SerializationError)` - The file is not a JSON object of strings
    pub fn open(path: &Path, user_id: impl Into<String>) -> CaseResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
        }

        let lock = FileLock::acquire(path, user_id)?;

        let entries = if path.exists() {
            let contents = fs::read_to_string(path).map_err(io_error("read", path))?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents).map_err(|e| CaseError::SerializationError {
                    reason: format!("Invalid JSON in {}: {}", path.display(), e),
                })?
            }
        } else {
            BTreeMap::new()
        };

        log::info!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(FileStore {
            path: path.to_path_buf(),
            entries,
            lock,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Metadata of the lock this store holds
    pub fn lock_info(&self) -> &LockInfo {
        &self.lock.info
    }

    fn flush(&self) -> CaseResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, &json)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CaseResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CaseResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in step with the file that is still on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CaseResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{QUOTES_KEY, TIMELINE_KEY};

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("casefile.json")
    }

    #[test]
    fn test_lock_path_generation() {
        let path = Path::new("/path/to/casefile.json");
        assert_eq!(lock_path_for(path), Path::new("/path/to/casefile.json.lock"));
    }

    #[test]
    fn test_fresh_lock_is_not_stale() {
        let info = LockInfo::current("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(!info.is_stale());
    }

    #[test]
    fn test_day_old_lock_is_stale() {
        let mut info = LockInfo::current("gone");
        info.locked_at = Utc::now() - chrono::Duration::hours(25);
        assert!(info.is_stale());
    }

    #[test]
    fn test_stale_lock_file_is_taken_over() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut old = LockInfo::current("crashed");
        old.locked_at = Utc::now() - chrono::Duration::hours(48);
        fs::write(lock_path_for(&path), serde_json::to_string(&old).unwrap()).unwrap();

        let store = FileStore::open(&path, "tester").unwrap();
        assert_eq!(store.lock_info().user_id, "tester");
    }

    #[test]
    fn test_set_and_reopen_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = FileStore::open(&path, "tester").unwrap();
        store.set(TIMELINE_KEY, "[\"<strong>1/2/2026:</strong> a\"]").unwrap();
        drop(store);

        let reopened = FileStore::open(&path, "tester").unwrap();
        assert_eq!(
            reopened.get(TIMELINE_KEY).unwrap().as_deref(),
            Some("[\"<strong>1/2/2026:</strong> a\"]")
        );
        assert_eq!(reopened.get(QUOTES_KEY).unwrap(), None);
    }

    #[test]
    fn test_atomic_write_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.json");

        write_atomic(&path, "[]").unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("timeline.json.tmp").exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_second_open_is_refused_until_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let first = FileStore::open(&path, "first").unwrap();
        assert_eq!(read_lock_info(&lock_path_for(&path)).unwrap().user_id, "first");

        let err = FileStore::open(&path, "second").err().unwrap();
        assert_eq!(err.error_code(), "FILE_LOCKED");
        assert!(err.is_recoverable());

        drop(first);
        assert!(!lock_path_for(&path).exists());
        assert!(FileStore::open(&path, "second").is_ok());
    }

    #[test]
    fn test_corrupt_store_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "{not json").unwrap();

        let err = FileStore::open(&path, "tester").err().unwrap();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_remove_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = FileStore::open(&path, "tester").unwrap();
        store.set(QUOTES_KEY, "[]").unwrap();
        store.remove(QUOTES_KEY).unwrap();

        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(on_disk.is_empty());
    }
}
