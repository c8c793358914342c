use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::snapshot::Snapshot;

#[derive(Debug, Error)]
#[error("malformed state document: {0}")]
pub struct CodecError(#[from] serde_json::Error);

/// Pretty JSON with a one-space indent.
pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
    snapshot.serialize(&mut ser)?;
    Ok(out)
}

/// Every key is required and unknown keys are rejected.
pub fn decode(bytes: &[u8]) -> Result<Snapshot, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
