use crate::{
    error::{AppError, AppResult},
    models::{
        youtube::{Channel, Page, SearchResult},
        ChannelSummary,
    },
    services::{
        non_empty,
        pagination::fetch_page,
        youtube::{QueryParams, Resource, YouTubeApi},
    },
};

/// Maximum number of channels returned by a free-text search
pub const SEARCH_RESULT_LIMIT: u32 = 25;

/// How `/api/channels` finds channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelLookup {
    /// Resolve an `@handle` directly
    Handle(String),
    /// Free-text channel search
    Query(String),
}

impl ChannelLookup {
    /// Picks the lookup mode from the request parameters; a handle wins
    /// over a query. Empty values count as absent.
    pub fn from_params(handle: Option<String>, query: Option<String>) -> AppResult<Self> {
        if let Some(handle) = non_empty(handle) {
            return Ok(ChannelLookup::Handle(handle));
        }

        non_empty(query).map(ChannelLookup::Query).ok_or_else(|| {
            AppError::InvalidInput("Provide ?q=channel+name or ?handle=@handle".to_string())
        })
    }
}

/// Looks up channels by handle or by search query. Neither mode paginates.
pub async fn find_channels(
    api: &dyn YouTubeApi,
    lookup: &ChannelLookup,
) -> AppResult<Vec<ChannelSummary>> {
    let channels: Vec<ChannelSummary> = match lookup {
        ChannelLookup::Handle(handle) => {
            let params: QueryParams = vec![
                ("part", "snippet,statistics".to_string()),
                ("forHandle", handle.clone()),
            ];
            let page: Page<Channel> = fetch_page(api, Resource::Channels, &params).await?;
            page.items.into_iter().map(ChannelSummary::from).collect()
        }
        ChannelLookup::Query(query) => {
            let params: QueryParams = vec![
                ("part", "snippet".to_string()),
                ("q", query.clone()),
                ("type", "channel".to_string()),
                ("maxResults", SEARCH_RESULT_LIMIT.to_string()),
            ];
            let page: Page<SearchResult> = fetch_page(api, Resource::Search, &params).await?;
            page.items.into_iter().map(ChannelSummary::from).collect()
        }
    };

    tracing::info!(
        lookup = ?lookup,
        results = channels.len(),
        "Channel lookup completed"
    );

    Ok(channels)
}
