use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::PlaylistsResponse,
    routes::AppState,
    services::{non_empty, playlists},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistsQuery {
    channel_id: Option<String>,
}

/// Handler for `GET /api/playlists?channelId=UC...`
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<PlaylistsQuery>, QueryRejection>,
) -> AppResult<Json<PlaylistsResponse>> {
    let Query(params) = query?;
    let channel_id = non_empty(params.channel_id)
        .ok_or_else(|| AppError::InvalidInput("Provide ?channelId=UC...".to_string()))?;

    tracing::info!(
        request_id = %request_id,
        channel_id = %channel_id,
        "Processing playlist listing"
    );

    let items = playlists::list_playlists(state.youtube.as_ref(), &channel_id)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Playlist listing failed");
        })?;

    Ok(Json(PlaylistsResponse { items }))
}
