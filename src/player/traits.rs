use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One track currently enqueued on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    #[serde(rename = "id")]
    pub item_id: u32,
    /// Zero-based ordinal within the queue.
    pub position: u32,
    #[serde(default)]
    pub track_id: u32,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    /// Empty for streamed sources.
    #[serde(rename = "path", default)]
    pub file_path: String,
    #[serde(default)]
    pub uri: String,
}

/// Body of `GET /queue`. `count` is informational only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueDocument {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub items: Vec<QueueEntry>,
}

/// Body of `GET /player`.
///
/// The server leaves fields out while stopped, so every field falls back
/// to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerStatus {
    /// `play`, `pause` or `stop`, passed through untouched.
    pub state: String,
    #[serde(rename = "repeat")]
    pub repeat_mode: String,
    #[serde(rename = "shuffle")]
    pub shuffle_mode: bool,
    pub volume: u32,
    #[serde(rename = "item_id")]
    pub current_item_id: u32,
    #[serde(rename = "item_length_ms")]
    pub item_duration_ms: u64,
    #[serde(rename = "item_progress_ms")]
    pub item_progress_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistCatalogEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

/// Body of `GET /library/playlists`. `total` is informational only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistCatalog {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub items: Vec<PlaylistCatalogEntry>,
}

/// The remote calls the store and restore workflows depend on.
///
/// None of them retry; a failure is reported as [`crate::Error::Transport`].
pub trait MediaServer {
    fn fetch_queue(&self) -> Result<QueueDocument>;
    fn fetch_player_status(&self) -> Result<PlayerStatus>;
    fn fetch_playlist_catalog(&self) -> Result<PlaylistCatalog>;

    /// Replace the queue with `uri` and start playing at `start_position`.
    ///
    /// `start_position` is the server's zero-based index.
    fn load_playlist(&self, uri: &str, shuffle: bool, start_position: i64) -> Result<()>;

    fn pause_playback(&self) -> Result<()>;
}
