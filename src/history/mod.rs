//! Recently used emoticons.
//!
//! The list is most-recent-first, bounded, and free of duplicates. The pure
//! list operation lives here; [`HistoryStore`] adds the JSON file behind it.

mod store;

pub use store::{HISTORY_FILE, HistoryStore, load, save};

/// Default number of entries kept.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Move `emoticon` to the front of `history`, keeping at most `max` entries.
///
/// An existing occurrence is removed first, so the list never holds
/// duplicates.
pub fn promote(history: &mut Vec<String>, emoticon: &str, max: usize) {
    history.retain(|e| e != emoticon);
    history.insert(0, emoticon.to_string());
    history.truncate(max);
}

/// Drop duplicates (keeping the first occurrence) and cap the length.
///
/// Used on lists read from disk, which may have been edited by hand.
pub fn normalize(history: Vec<String>, max: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(history.len().min(max));
    for emoticon in history {
        if out.len() == max {
            break;
        }
        if !emoticon.is_empty() && !out.contains(&emoticon) {
            out.push(emoticon);
        }
    }
    out
}
