pub mod channels;
pub mod pagination;
pub mod playlist_search;
pub mod playlists;
pub mod youtube;

pub use youtube::{YouTubeApi, YouTubeClient};

/// Treats an empty query parameter the same as a missing one
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
