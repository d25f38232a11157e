use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the process working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even if a #[serial] is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Build a spec argument for `file` with `(name, question, default)` fields.
///
/// Fields keep the given order; `serde_json` is built with `preserve_order`.
pub(crate) fn spec_json(file: &Path, fields: &[(&str, Option<&str>, Option<&str>)]) -> String {
    let mut input = serde_json::Map::new();
    for (name, question, default) in fields {
        let mut options = serde_json::Map::new();
        if let Some(question) = question {
            options.insert("question".into(), (*question).into());
        }
        if let Some(default) = default {
            options.insert("default".into(), (*default).into());
        }
        input.insert((*name).to_string(), options.into());
    }
    serde_json::json!({ "file": file, "input": input }).to_string()
}
