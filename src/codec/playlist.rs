use crate::snapshot::Queue;

pub const HEADER: &str = "#EXTM3U";

/// Render `queue` as an extended M3U document.
///
/// One `#EXTINF` line and one path line per entry, in queue order, with no
/// trailing newline. The server reads this file back; we never do.
pub fn encode(queue: &Queue) -> String {
    let mut lines = Vec::with_capacity(1 + queue.len() * 2);
    lines.push(HEADER.to_string());

    for entry in queue.entries() {
        lines.push(format!(
            "#EXTINF:{}, {} - {}",
            entry.track_id, entry.artist, entry.title
        ));
        lines.push(entry.file_path.clone());
    }

    lines.join("\n")
}
