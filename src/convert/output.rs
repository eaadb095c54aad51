use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use crate::foundation::error::{DmdError, DmdResult};

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create `path`'s parent directory (and ancestors). Safe to race with other jobs.
pub fn ensure_parent_dir(path: &Path) -> DmdResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            DmdError::io(
                format!("create output directory '{}'", parent.display()),
                e,
            )
        })?;
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.{n}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Write `bytes` to `path` via a temporary sibling and a rename, so `path` is either absent,
/// its previous contents, or the complete new contents.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> DmdResult<()> {
    ensure_parent_dir(path)?;

    let tmp = temp_sibling(path);
    if let Err(e) = std::fs::write(&tmp, bytes) {
        std::fs::remove_file(&tmp).ok();
        return Err(DmdError::io(format!("write '{}'", tmp.display()), e));
    }
    std::fs::rename(&tmp, path).map_err(|e| {
        std::fs::remove_file(&tmp).ok();
        DmdError::io(format!("rename into '{}'", path.display()), e)
    })
}
