use crate::{
    error::AppResult,
    models::{youtube::Playlist, PlaylistSummary},
    services::{
        pagination::collect_all_pages,
        youtube::{QueryParams, Resource, YouTubeApi},
    },
};

/// Lists every playlist owned by `channel_id`, across all pages
pub async fn list_playlists(
    api: &dyn YouTubeApi,
    channel_id: &str,
) -> AppResult<Vec<PlaylistSummary>> {
    let params: QueryParams = vec![
        ("part", "snippet,contentDetails".to_string()),
        ("channelId", channel_id.to_string()),
    ];

    let playlists: Vec<Playlist> = collect_all_pages(api, Resource::Playlists, &params).await?;
    let summaries: Vec<PlaylistSummary> =
        playlists.into_iter().map(PlaylistSummary::from).collect();

    tracing::info!(
        channel_id = %channel_id,
        results = summaries.len(),
        "Playlist listing completed"
    );

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, error::UpstreamError, services::youtube::MockYouTubeApi};
    use serde_json::json;

    #[tokio::test]
    async fn test_channel_without_playlists() {
        let mut api = MockYouTubeApi::new();
        api.expect_get_json()
            .withf(|resource, params| {
                *resource == Resource::Playlists
                    && params
                        .iter()
                        .any(|(k, v)| *k == "part" && v == "snippet,contentDetails")
            })
            .times(1)
            .returning(|_, _| Ok(json!({ "items": [] })));

        let playlists = list_playlists(&api, "UCempty").await.unwrap();
        assert!(playlists.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let mut api = MockYouTubeApi::new();
        api.expect_get_json().times(1).returning(|_, _| {
            Err(UpstreamError::Status {
                status: 404,
                body: "channelNotFound".to_string(),
            })
        });

        let err = list_playlists(&api, "UCmissing").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Upstream(UpstreamError::Status { status: 404, .. })
        ));
    }
}
