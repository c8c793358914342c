use std::fmt;
use tracing::info;

use super::artifact::{self, Owner};
use super::pipeline::Pipeline;
use crate::app::config::UserConfig;
use crate::codec::{playlist, state};
use crate::error::{Error, Result, Warning};
use crate::player::MediaServer;
use crate::snapshot::{self, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStep {
    FetchQueue,
    ValidateQueue,
    WritePlaylist,
    FetchPlayer,
    MergeSnapshot,
    WriteState,
}

impl fmt::Display for StoreStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreStep::FetchQueue => "fetch queue",
            StoreStep::ValidateQueue => "validate queue",
            StoreStep::WritePlaylist => "write playlist",
            StoreStep::FetchPlayer => "fetch player status",
            StoreStep::MergeSnapshot => "merge snapshot",
            StoreStep::WriteState => "write state",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct StoreReport {
    pub snapshot: Snapshot,
    pub queue_len: usize,
    pub warnings: Vec<Warning>,
}

/// Capture the server queue into the playlist file and the playback
/// position into the state file.
///
/// Nothing is written unless the queue is non-empty and free of live-input
/// entries. A state file from an earlier run is removed before the new
/// playlist is written, so a failure after that point leaves no state file
/// and a later restore refuses to run.
pub fn store<S>(server: &S, config: &UserConfig) -> Result<StoreReport>
where
    S: MediaServer + ?Sized,
{
    let owner = Owner::from(config);
    let mut pipeline = Pipeline::new();

    let doc = pipeline.required(StoreStep::FetchQueue, || server.fetch_queue())?;
    let queue = pipeline.required(StoreStep::ValidateQueue, || {
        Ok(snapshot::validate_queue(doc, &config.live_input_path)?)
    })?;

    pipeline.required(StoreStep::WritePlaylist, || {
        artifact::discard(&config.state_path)?;
        let text = playlist::encode(&queue);
        artifact::write_owned(&config.playlist_path, text.as_bytes(), owner)
    })?;
    info!(
        "Queue of {} tracks written to {}",
        queue.len(),
        config.playlist_path.display()
    );

    let status = pipeline.required(StoreStep::FetchPlayer, || server.fetch_player_status())?;
    let snapshot = pipeline.required(StoreStep::MergeSnapshot, || {
        Ok(snapshot::merge(status, &queue))
    })?;
    if !snapshot.is_resolved() {
        pipeline.warn(Warning::UnresolvedPosition {
            item_id: snapshot.current_item_id,
        });
    }

    pipeline.required(StoreStep::WriteState, || {
        let bytes = state::encode(&snapshot).map_err(|source| Error::Codec {
            path: config.state_path.clone(),
            source,
        })?;
        artifact::write_owned(&config.state_path, &bytes, owner)
    })?;
    info!(
        "Playback position stored: track {} of {} at {} ms",
        snapshot.resolved_position,
        queue.len(),
        snapshot.item_progress_ms
    );

    Ok(StoreReport {
        queue_len: queue.len(),
        snapshot,
        warnings: pipeline.finish(),
    })
}
