use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, IoOp, Result};

/// Exclusive lock held for the whole store/restore run.
/// The OS drops the lock if the process dies; the file itself stays.
#[derive(Debug)]
pub struct RunLock {
    file: File,
}

impl RunLock {
    /// Take the lock without waiting.
    /// Fails with [`Error::Locked`] if another invocation holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = open_lock_file(path).map_err(|e| Error::io(IoOp::Lock, path, e))?;

        if file.try_lock_exclusive().is_err() {
            return Err(Error::Locked {
                path: path.to_path_buf(),
            });
        }

        // PID is only informational
        if let Err(e) = write_pid(&file) {
            debug!(path = %path.display(), "cannot record pid in lock file: {e}");
        }

        Ok(Self { file })
    }
}

/// flock works on a read-only descriptor, so a lock file created by
/// another user is still usable.
fn open_lock_file(path: &Path) -> std::io::Result<File> {
    match OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
    {
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            OpenOptions::new().read(true).open(path)
        }
        other => other,
    }
}

fn write_pid(mut file: &File) -> std::io::Result<()> {
    file.set_len(0)?;
    write!(file, "{}", std::process::id())
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
