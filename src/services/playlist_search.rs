use crate::{
    error::AppResult,
    models::{youtube::PlaylistItem, PlaylistItemMatch},
    services::{
        pagination::collect_all_pages,
        youtube::{QueryParams, Resource, YouTubeApi},
    },
};

/// Returns the items of `playlist_id` whose title or description contains
/// `needle`, ignoring case.
///
/// Positions are 1-based and taken from the full playlist, so a match keeps
/// the index it has in the playlist rather than its rank among matches.
pub async fn search_playlist(
    api: &dyn YouTubeApi,
    playlist_id: &str,
    needle: &str,
) -> AppResult<Vec<PlaylistItemMatch>> {
    let params: QueryParams = vec![
        ("part", "snippet,contentDetails".to_string()),
        ("playlistId", playlist_id.to_string()),
    ];

    let items: Vec<PlaylistItem> =
        collect_all_pages(api, Resource::PlaylistItems, &params).await?;
    let total = items.len();
    let matches = filter_items(&items, playlist_id, needle);

    tracing::info!(
        playlist_id = %playlist_id,
        scanned = total,
        matches = matches.len(),
        "Playlist search completed"
    );

    Ok(matches)
}

/// Case-insensitive substring filter over title and description
pub fn filter_items(
    items: &[PlaylistItem],
    playlist_id: &str,
    needle: &str,
) -> Vec<PlaylistItemMatch> {
    let needle = needle.to_lowercase();

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| (idx + 1, item))
        .filter(|(_, item)| {
            item.title().to_lowercase().contains(&needle)
                || item.description().to_lowercase().contains(&needle)
        })
        .map(|(position, item)| PlaylistItemMatch::new(item, playlist_id, position))
        .collect()
}
