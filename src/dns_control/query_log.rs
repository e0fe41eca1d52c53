//! Query log selection.

use super::types::QueryLogEntry;

/// Returns the entry with the latest timestamp.
///
/// On ties the first maximal entry in list order wins. The control plane does
/// not guarantee time ordering, so the whole list is scanned.
pub fn latest_entry(entries: &[QueryLogEntry]) -> Option<&QueryLogEntry> {
    let mut iter = entries.iter();
    let mut latest = iter.next()?;
    for entry in iter {
        if entry.timestamp > latest.timestamp {
            latest = entry;
        }
    }
    Some(latest)
}
