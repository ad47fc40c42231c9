use serde::de::DeserializeOwned;

use crate::{
    error::UpstreamError,
    models::youtube::Page,
    services::youtube::{QueryParams, Resource, YouTubeApi},
};

/// Largest page size the list endpoints accept
pub const MAX_PAGE_SIZE: u32 = 50;

/// Fetches a single page of `resource`
pub async fn fetch_page<T>(
    api: &dyn YouTubeApi,
    resource: Resource,
    params: &QueryParams,
) -> Result<Page<T>, UpstreamError>
where
    T: DeserializeOwned,
{
    let value = api.get_json(resource, params).await?;
    Ok(serde_json::from_value(value)?)
}

/// Fetches every page of `resource` and returns all items in upstream order.
///
/// Pages are requested one after another since each request needs the
/// previous response's `nextPageToken`. Stops on the first response without
/// a token; there is no page limit.
pub async fn collect_all_pages<T>(
    api: &dyn YouTubeApi,
    resource: Resource,
    params: &QueryParams,
) -> Result<Vec<T>, UpstreamError>
where
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let mut query = params.clone();
        query.push(("maxResults", MAX_PAGE_SIZE.to_string()));
        if let Some(token) = page_token.take() {
            query.push(("pageToken", token));
        }

        let page: Page<T> = fetch_page(api, resource, &query).await?;
        pages += 1;

        page_token = page.continuation().map(str::to_string);
        items.extend(page.items);

        if page_token.is_none() {
            break;
        }
    }

    tracing::debug!(
        resource = %resource,
        pages,
        items = items.len(),
        "Collected all pages"
    );

    Ok(items)
}
