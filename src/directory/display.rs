use crate::domain::{DirectoryEntry, LocalUser, RemoteUser};

/// Everything the directory currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryView {
    /// The fetch has not settled yet.
    pub loading: bool,
    /// User-facing message when the fetch failed.
    pub error: Option<String>,
    pub search_term: String,
    /// The display list: fetched users then local users, filtered by name.
    pub entries: Vec<DirectoryEntry>,
}

/// Builds the display list.
///
/// Fetched users keep service order and come first; local users follow in
/// insertion order. Nothing is deduplicated.
pub fn display_list(remote: &[RemoteUser], local: &[LocalUser], term: &str) -> Vec<DirectoryEntry> {
    remote
        .iter()
        .cloned()
        .map(DirectoryEntry::Remote)
        .chain(local.iter().cloned().map(DirectoryEntry::Local))
        .filter(|entry| entry.matches(term))
        .collect()
}
