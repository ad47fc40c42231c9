use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::PlaylistSearchResponse,
    routes::AppState,
    services::{non_empty, playlist_search},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSearchQuery {
    playlist_id: Option<String>,
    q: Option<String>,
}

/// Handler for `GET /api/playlist-search?playlistId=PL...&q=text`
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<PlaylistSearchQuery>, QueryRejection>,
) -> AppResult<Json<PlaylistSearchResponse>> {
    let Query(params) = query?;
    let (Some(playlist_id), Some(needle)) = (non_empty(params.playlist_id), non_empty(params.q))
    else {
        return Err(AppError::InvalidInput(
            "Provide ?playlistId=PL...&q=Guest+Name".to_string(),
        ));
    };

    tracing::info!(
        request_id = %request_id,
        playlist_id = %playlist_id,
        query = %needle,
        "Processing playlist search"
    );

    let results = playlist_search::search_playlist(state.youtube.as_ref(), &playlist_id, &needle)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Playlist search failed");
        })?;

    Ok(Json(PlaylistSearchResponse::from(results)))
}
