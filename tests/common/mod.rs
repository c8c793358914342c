#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;

use queuerestore::app::config::{UserConfig, DEFAULT_PLAYLIST_NAME};
use queuerestore::player::{
    MediaServer, PlayerStatus, PlaylistCatalog, PlaylistCatalogEntry, QueueDocument, QueueEntry,
};
use queuerestore::workflow::artifact::Owner;
use queuerestore::{Error, Result};

pub const LIVE_INPUT: &str = "/srv/shairport-sync/pipe";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchQueue,
    FetchPlayer,
    FetchCatalog,
    Load {
        uri: String,
        shuffle: bool,
        start_position: i64,
    },
    Pause,
}

/// In-memory server that records every call it gets.
#[derive(Default)]
pub struct FakeServer {
    pub queue: Vec<QueueEntry>,
    pub status: PlayerStatus,
    pub catalog: Vec<PlaylistCatalogEntry>,
    pub fail_player: bool,
    pub fail_load: bool,
    pub fail_pause: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeServer {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn load_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Load { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl MediaServer for FakeServer {
    fn fetch_queue(&self) -> Result<QueueDocument> {
        self.record(Call::FetchQueue);
        Ok(QueueDocument {
            version: 1,
            count: self.queue.len() as u32,
            items: self.queue.clone(),
        })
    }

    fn fetch_player_status(&self) -> Result<PlayerStatus> {
        self.record(Call::FetchPlayer);
        if self.fail_player {
            return Err(transport_error("http://fake/api/player"));
        }
        Ok(self.status.clone())
    }

    fn fetch_playlist_catalog(&self) -> Result<PlaylistCatalog> {
        self.record(Call::FetchCatalog);
        Ok(PlaylistCatalog {
            total: self.catalog.len() as u32,
            items: self.catalog.clone(),
        })
    }

    fn load_playlist(&self, uri: &str, shuffle: bool, start_position: i64) -> Result<()> {
        self.record(Call::Load {
            uri: uri.to_string(),
            shuffle,
            start_position,
        });
        if self.fail_load {
            return Err(transport_error("http://fake/api/queue/items/add"));
        }
        Ok(())
    }

    fn pause_playback(&self) -> Result<()> {
        self.record(Call::Pause);
        if self.fail_pause {
            return Err(transport_error("http://fake/api/player/pause"));
        }
        Ok(())
    }
}

/// A real `reqwest::Error`, produced without touching the network.
pub fn transport_error(url: &str) -> Error {
    let source = reqwest::blocking::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    Error::transport(url, source)
}

pub fn entry(item_id: u32, position: u32, path: &str) -> QueueEntry {
    QueueEntry {
        item_id,
        position,
        track_id: 1000 + item_id,
        artist: format!("Artist {item_id}"),
        title: format!("Title {item_id}"),
        file_path: path.to_string(),
        uri: format!("library:track:{}", 1000 + item_id),
    }
}

pub fn playing(current_item_id: u32, shuffle: bool) -> PlayerStatus {
    PlayerStatus {
        state: "play".to_string(),
        repeat_mode: "off".to_string(),
        shuffle_mode: shuffle,
        volume: 60,
        current_item_id,
        item_duration_ms: 180_000,
        item_progress_ms: 42_000,
    }
}

pub fn own_playlist(uri: &str) -> PlaylistCatalogEntry {
    PlaylistCatalogEntry {
        id: 3,
        name: DEFAULT_PLAYLIST_NAME.to_string(),
        uri: uri.to_string(),
    }
}

/// Config pointing every file into `dir`, owned by the test user.
pub fn config(dir: &Path) -> UserConfig {
    let owner = Owner::current();
    UserConfig {
        api_url: "http://fake/api".to_string(),
        owner_uid: owner.uid,
        owner_gid: owner.gid,
        playlist_path: dir.join("_queueReStore.m3u"),
        state_path: dir.join("position.json"),
        live_input_path: LIVE_INPUT.to_string(),
        playlist_name: DEFAULT_PLAYLIST_NAME.to_string(),
        log_file: None,
        lock_path: dir.join("run.lock"),
    }
}
