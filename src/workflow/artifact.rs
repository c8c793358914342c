use nix::unistd::{chown, Gid, Uid};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::app::config::UserConfig;
use crate::error::{Error, IoOp, Result, Warning};

/// Owner given to every written artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub uid: u32,
    pub gid: u32,
}

impl Owner {
    pub fn current() -> Self {
        Self {
            uid: nix::unistd::getuid().as_raw(),
            gid: nix::unistd::getgid().as_raw(),
        }
    }
}

impl From<&UserConfig> for Owner {
    fn from(config: &UserConfig) -> Self {
        Self {
            uid: config.owner_uid,
            gid: config.owner_gid,
        }
    }
}

/// Replace `path` with `contents`, then hand it to `owner`.
pub fn write_owned(path: &Path, contents: &[u8], owner: Owner) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(IoOp::Write, path, e))?;
    chown(
        path,
        Some(Uid::from_raw(owner.uid)),
        Some(Gid::from_raw(owner.gid)),
    )
    .map_err(|errno| Error::io(IoOp::Chown, path, errno.into()))
}

pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(IoOp::Read, path, e))
}

/// Delete a leftover artifact before it can be paired with a newer one.
/// A missing file is fine.
pub fn discard(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(IoOp::Remove, path, e)),
    }
}

/// Delete an artifact; a missing file is only worth a warning.
pub fn remove(path: &Path) -> std::result::Result<(), Warning> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Warning::ArtifactMissing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Warning::DeleteFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}
