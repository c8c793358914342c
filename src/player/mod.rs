pub mod owntone;
pub mod traits;

pub use owntone::OwnToneClient;
pub use traits::{
    MediaServer, PlayerStatus, PlaylistCatalog, PlaylistCatalogEntry, QueueDocument, QueueEntry,
};
