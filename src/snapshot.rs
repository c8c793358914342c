//! Correlates the fetched queue with the player status into one [`Snapshot`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::player::{PlayerStatus, QueueDocument, QueueEntry};

/// A fetched queue known to hold at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    entries: Vec<QueueEntry>,
}

impl Queue {
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan; play queues are short.
    pub fn find_item(&self, item_id: u32) -> Option<&QueueEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }
}

/// An empty queue is not a valid capture target.
pub fn build_from_queue(doc: QueueDocument) -> Result<Queue, ValidationError> {
    if doc.items.is_empty() {
        return Err(ValidationError::EmptyQueue);
    }
    Ok(Queue { entries: doc.items })
}

/// Returns the first entry that plays from the reserved live-input path.
///
/// An empty `reserved_path` disables the check.
pub fn find_unsafe_source<'a>(queue: &'a Queue, reserved_path: &str) -> Option<&'a QueueEntry> {
    if reserved_path.is_empty() {
        return None;
    }
    queue.entries.iter().find(|e| e.file_path == reserved_path)
}

pub fn detect_unsafe_source(queue: &Queue, reserved_path: &str) -> bool {
    find_unsafe_source(queue, reserved_path).is_some()
}

/// Non-empty queue without any live-input entry.
pub fn validate_queue(doc: QueueDocument, reserved_path: &str) -> Result<Queue, ValidationError> {
    let queue = build_from_queue(doc)?;
    if let Some(entry) = find_unsafe_source(&queue, reserved_path) {
        return Err(ValidationError::UnsafeSource {
            path: entry.file_path.clone(),
            item_id: entry.item_id,
        });
    }
    Ok(queue)
}

/// The persisted capture: player status plus where the current item sits in the queue.
///
/// Serialized keys match the state files written by earlier releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
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
    pub item_progress_ms: u64,

    /// 1-based; 0 when the current item was not found in the queue.
    #[serde(rename = "Position")]
    pub resolved_position: u32,
    #[serde(rename = "TrackId")]
    pub resolved_track_id: u32,
    #[serde(rename = "Uri")]
    pub resolved_uri: String,
}

impl Snapshot {
    pub fn is_resolved(&self) -> bool {
        self.resolved_position != 0
    }

    /// Index the server expects for `playback_from_position`.
    pub fn server_start_position(&self) -> i64 {
        i64::from(self.resolved_position) - 1
    }
}

/// Resolve the player's current item against `queue`.
///
/// A current item missing from the queue leaves the resolved fields at zero.
pub fn merge(status: PlayerStatus, queue: &Queue) -> Snapshot {
    let mut snapshot = Snapshot {
        state: status.state,
        repeat_mode: status.repeat_mode,
        shuffle_mode: status.shuffle_mode,
        volume: status.volume,
        current_item_id: status.current_item_id,
        item_duration_ms: status.item_duration_ms,
        item_progress_ms: status.item_progress_ms,
        ..Snapshot::default()
    };

    if let Some(entry) = queue.find_item(snapshot.current_item_id) {
        snapshot.resolved_position = entry.position + 1;
        snapshot.resolved_track_id = entry.track_id;
        snapshot.resolved_uri = entry.uri.clone();
    }

    snapshot
}
