use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-editable configuration, read once at startup
/// stored in `/etc/queuerestore.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Base of the OwnTone JSON API, e.g. `http://localhost:3689/api`
    pub api_url: String,
    /// Owner applied to both written files so the server can read them
    pub owner_uid: u32,
    pub owner_gid: u32,
    pub playlist_path: PathBuf,
    pub state_path: PathBuf,
    /// Pipe of the live-input source; queues playing from it are never stored.
    /// Empty disables the check.
    #[serde(default)]
    pub live_input_path: String,
    #[serde(default = "default_playlist_name")]
    pub playlist_name: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default = "default_lock_path")]
    pub lock_path: PathBuf,
}

pub const DEFAULT_PLAYLIST_NAME: &str = "_queueReStore";

fn default_playlist_name() -> String {
    DEFAULT_PLAYLIST_NAME.to_string()
}

fn default_lock_path() -> PathBuf {
    PathBuf::from("/tmp/queuerestore.lock")
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3689/api".to_string(),
            owner_uid: 0,
            owner_gid: 0,
            playlist_path: PathBuf::from("/srv/music/playlists/_queueReStore.m3u"),
            state_path: PathBuf::from("/var/lib/queuerestore/position.json"),
            live_input_path: String::new(),
            playlist_name: default_playlist_name(),
            log_file: Some(PathBuf::from("/var/log/queuerestore.log")),
            lock_path: default_lock_path(),
        }
    }
}
