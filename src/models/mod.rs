use serde::Serialize;
use std::collections::BTreeMap;

pub mod youtube;

use youtube::{Channel, Playlist, PlaylistItem, SearchResult, Snippet, Thumbnail};

/// Base of the watch links returned by playlist search
pub const WATCH_URL: &str = "https://www.youtube.com/watch";

/// Channel returned to the client by `/api/channels`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: BTreeMap<String, String>,
    /// Only present for handle lookups; search results carry no statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<String>,
}

/// Playlist returned to the client by `/api/playlists`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub playlist_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u64>,
}

/// Playlist item that matched a `/api/playlist-search` query
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaylistItemMatch {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub items: Vec<ChannelSummary>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistSearchResponse {
    pub count: usize,
    pub results: Vec<PlaylistItemMatch>,
}

impl From<Vec<PlaylistItemMatch>> for PlaylistSearchResponse {
    fn from(results: Vec<PlaylistItemMatch>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

// ============================================================================
// Mapping from YouTube API types
// ============================================================================

/// Size name to image URL; sizes without a URL are dropped
fn thumbnail_urls(thumbnails: BTreeMap<String, Option<Thumbnail>>) -> BTreeMap<String, String> {
    thumbnails
        .into_iter()
        .filter_map(|(size, thumbnail)| thumbnail.and_then(|t| t.url).map(|url| (size, url)))
        .collect()
}

impl From<Channel> for ChannelSummary {
    fn from(channel: Channel) -> Self {
        let snippet = channel.snippet.unwrap_or_default();

        ChannelSummary {
            channel_id: channel.id,
            title: snippet.title.unwrap_or_default(),
            description: snippet.description.unwrap_or_default(),
            thumbnails: thumbnail_urls(snippet.thumbnails),
            subscriber_count: channel.statistics.and_then(|s| s.subscriber_count),
        }
    }
}

impl From<SearchResult> for ChannelSummary {
    fn from(result: SearchResult) -> Self {
        let Snippet {
            title,
            description,
            channel_title,
            thumbnails,
        } = result.snippet.unwrap_or_default();

        ChannelSummary {
            channel_id: result.id.and_then(|id| id.channel_id).unwrap_or_default(),
            // Search snippets name the channel in `channelTitle`
            title: channel_title
                .filter(|t| !t.is_empty())
                .or(title)
                .unwrap_or_default(),
            description: description.unwrap_or_default(),
            thumbnails: thumbnail_urls(thumbnails),
            subscriber_count: None,
        }
    }
}

impl From<Playlist> for PlaylistSummary {
    fn from(playlist: Playlist) -> Self {
        let snippet = playlist.snippet.unwrap_or_default();

        PlaylistSummary {
            playlist_id: playlist.id,
            title: snippet.title.unwrap_or_default(),
            description: snippet.description.unwrap_or_default(),
            thumbnails: thumbnail_urls(snippet.thumbnails),
            item_count: playlist.content_details.and_then(|d| d.item_count),
        }
    }
}

impl PlaylistItemMatch {
    /// Builds the match for `item`, linking to it at its 1-based `position`
    /// inside `playlist_id`.
    pub fn new(item: &PlaylistItem, playlist_id: &str, position: usize) -> Self {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("v", item.video_id().unwrap_or_default())
            .append_pair("list", playlist_id)
            .append_pair("index", &position.to_string())
            .finish();

        Self {
            title: item.title().to_string(),
            url: format!("{WATCH_URL}?{query}"),
        }
    }
}
