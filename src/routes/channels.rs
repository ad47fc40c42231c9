use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::ChannelsResponse,
    routes::AppState,
    services::channels::{self, ChannelLookup},
};

#[derive(Debug, Deserialize)]
pub struct ChannelsQuery {
    q: Option<String>,
    handle: Option<String>,
}

/// Handler for `GET /api/channels?handle=@name` and `GET /api/channels?q=text`
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<ChannelsQuery>, QueryRejection>,
) -> AppResult<Json<ChannelsResponse>> {
    let Query(params) = query?;
    let lookup = ChannelLookup::from_params(params.handle, params.q)?;

    tracing::info!(
        request_id = %request_id,
        lookup = ?lookup,
        "Processing channel lookup"
    );

    let items = channels::find_channels(state.youtube.as_ref(), &lookup)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Channel lookup failed");
        })?;

    Ok(Json(ChannelsResponse { items }))
}
