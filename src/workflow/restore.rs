use std::fmt;
use tracing::info;

use super::artifact;
use super::pipeline::Pipeline;
use crate::app::config::UserConfig;
use crate::codec::state;
use crate::error::{Error, Result, ValidationError, Warning};
use crate::player::{MediaServer, PlaylistCatalog};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStep {
    ReadState,
    FetchCatalog,
    ResolveOwnPlaylist,
    LoadAndSeek,
    Pause,
    CleanupPlaylistFile,
    CleanupStateFile,
}

impl fmt::Display for RestoreStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RestoreStep::ReadState => "read state",
            RestoreStep::FetchCatalog => "fetch playlist catalog",
            RestoreStep::ResolveOwnPlaylist => "resolve own playlist",
            RestoreStep::LoadAndSeek => "load and seek",
            RestoreStep::Pause => "pause",
            RestoreStep::CleanupPlaylistFile => "delete playlist file",
            RestoreStep::CleanupStateFile => "delete state file",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct RestoreReport {
    /// 1-based track number playback was moved to
    pub position: u32,
    pub playlist_uri: String,
    pub warnings: Vec<Warning>,
}

/// URI of the catalog playlist called `name`. The last one wins if the
/// library holds duplicates.
pub fn resolve_own_playlist(
    catalog: &PlaylistCatalog,
    name: &str,
) -> std::result::Result<String, ValidationError> {
    catalog
        .items
        .iter()
        .rev()
        .find(|p| p.name == name)
        .map(|p| p.uri.clone())
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| ValidationError::OwnPlaylistMissing {
            name: name.to_string(),
        })
}

pub fn read_state(config: &UserConfig) -> Result<Snapshot> {
    let bytes = artifact::read(&config.state_path)?;
    state::decode(&bytes).map_err(|source| Error::Codec {
        path: config.state_path.clone(),
        source,
    })
}

/// Reload the stored playlist on the server, jump to the stored track and
/// pause there, then delete both artifacts.
///
/// Pausing and cleanup are best effort once the playlist is loaded.
pub fn restore<S>(server: &S, config: &UserConfig) -> Result<RestoreReport>
where
    S: MediaServer + ?Sized,
{
    let mut pipeline = Pipeline::new();

    let snapshot = pipeline.required(RestoreStep::ReadState, || read_state(config))?;
    let catalog = pipeline.required(RestoreStep::FetchCatalog, || {
        server.fetch_playlist_catalog()
    })?;
    let playlist_uri = pipeline.required(RestoreStep::ResolveOwnPlaylist, || {
        Ok(resolve_own_playlist(&catalog, &config.playlist_name)?)
    })?;

    if !snapshot.is_resolved() {
        pipeline.warn(Warning::UnresolvedPosition {
            item_id: snapshot.current_item_id,
        });
    }

    pipeline.required(RestoreStep::LoadAndSeek, || {
        server.load_playlist(
            &playlist_uri,
            snapshot.shuffle_mode,
            snapshot.server_start_position(),
        )
    })?;
    pipeline.best_effort(RestoreStep::Pause, || {
        server.pause_playback().map_err(Warning::PauseFailed)
    });
    pipeline.best_effort(RestoreStep::CleanupPlaylistFile, || {
        artifact::remove(&config.playlist_path)
    });
    pipeline.best_effort(RestoreStep::CleanupStateFile, || {
        artifact::remove(&config.state_path)
    });

    info!(
        "Restored playlist and jumped to track number {}",
        snapshot.resolved_position
    );

    Ok(RestoreReport {
        position: snapshot.resolved_position,
        playlist_uri,
        warnings: pipeline.finish(),
    })
}
