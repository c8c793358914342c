use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::traits::{MediaServer, PlayerStatus, PlaylistCatalog, QueueDocument};
use crate::error::{Error, Result};

/// Client for the OwnTone JSON API (`http://host:3689/api`).
pub struct OwnToneClient {
    base_url: String,
    client: Client,
}

impl OwnToneClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| Error::transport(base_url.clone(), e))?;
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and reject non-2xx answers.
    fn send<F>(&self, path: &str, build: F) -> Result<(String, Response)>
    where
        F: FnOnce(&Client, &str) -> RequestBuilder,
    {
        let url = self.url(path);
        debug!(%url, "sending request");
        let response = build(&self.client, &url)
            .send()
            .and_then(Response::error_for_status)
            .map_err(|e| Error::transport(url.clone(), e))?;
        Ok((url, response))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (url, response) = self.send(path, |client, url| client.get(url))?;
        response.json().map_err(|e| Error::transport(url, e))
    }
}

impl MediaServer for OwnToneClient {
    fn fetch_queue(&self) -> Result<QueueDocument> {
        self.get_json("/queue")
    }

    fn fetch_player_status(&self) -> Result<PlayerStatus> {
        self.get_json("/player")
    }

    fn fetch_playlist_catalog(&self) -> Result<PlaylistCatalog> {
        self.get_json("/library/playlists")
    }

    fn load_playlist(&self, uri: &str, shuffle: bool, start_position: i64) -> Result<()> {
        let shuffle = shuffle.to_string();
        let start_position = start_position.to_string();
        let params = [
            ("uris", uri),
            ("clear", "true"),
            ("shuffle", shuffle.as_str()),
            ("playback", "start"),
            ("playback_from_position", start_position.as_str()),
        ];

        // The server reads the query string; the form body mirrors it.
        self.send("/queue/items/add", |client, url| {
            client.post(url).query(&params).form(&params)
        })?;
        Ok(())
    }

    fn pause_playback(&self) -> Result<()> {
        self.send("/player/pause", |client, url| client.put(url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_trailing_slash_is_ignored() {
        let client = OwnToneClient::new("http://localhost:3689/api/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3689/api");
        assert_eq!(client.url("/queue"), "http://localhost:3689/api/queue");
    }

    #[test]
    fn test_fetch_queue() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/queue")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"version":1,"count":2,"items":[
                    {"id":1,"position":0,"track_id":10,"artist":"A","title":"One","path":"/m/1.flac","uri":"library:track:10"},
                    {"id":2,"position":1,"track_id":11,"artist":"B","title":"Two","path":"/m/2.flac","uri":"library:track:11"}
                ]}"#,
            )
            .create();

        let client = OwnToneClient::new(&format!("{}/api", server.url())).unwrap();
        let doc = client.fetch_queue().unwrap();

        mock.assert();
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[1].position, 1);
    }

    #[test]
    fn test_server_error_is_transport_failure() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/api/player").with_status(500).create();

        let client = OwnToneClient::new(&format!("{}/api", server.url())).unwrap();
        let err = client.fetch_player_status().unwrap_err();

        match err {
            Error::Transport { url, .. } => assert!(url.ends_with("/api/player")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_body_is_transport_failure() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/library/playlists")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let client = OwnToneClient::new(&format!("{}/api", server.url())).unwrap();
        assert!(matches!(
            client.fetch_playlist_catalog(),
            Err(Error::Transport { .. })
        ));
    }

    #[test]
    fn test_load_playlist_sends_zero_based_position() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/queue/items/add")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("uris".into(), "library:playlist:5".into()),
                Matcher::UrlEncoded("clear".into(), "true".into()),
                Matcher::UrlEncoded("shuffle".into(), "false".into()),
                Matcher::UrlEncoded("playback".into(), "start".into()),
                Matcher::UrlEncoded("playback_from_position".into(), "4".into()),
            ]))
            .with_status(200)
            .create();

        let client = OwnToneClient::new(&format!("{}/api", server.url())).unwrap();
        client.load_playlist("library:playlist:5", false, 4).unwrap();

        mock.assert();
    }

    #[test]
    fn test_pause_uses_put() {
        let mut server = mockito::Server::new();
        let mock = server.mock("PUT", "/api/player/pause").with_status(204).create();

        let client = OwnToneClient::new(&format!("{}/api", server.url())).unwrap();
        client.pause_playback().unwrap();

        mock.assert();
    }
}
