//! Requests to the Steam Community site and the Steam Web API.

mod builder;
mod helpers;
mod response;

pub use builder::{
    SteamWorkshopAPIBuilder,
    DEFAULT_COLLECTION_URL_TEMPLATE,
    DEFAULT_PUBLISHED_FILE_DETAILS_URL,
};
pub use helpers::{parse_collection_item_ids, published_file_details_form, COLLECTION_ID_PLACEHOLDER};
pub use response::{GetPublishedFileDetailsResponse, GetPublishedFileDetailsResponseBody};

use crate::error::Error;
use crate::helpers::{check_response, parses_response};
use crate::rate_limiter::RequestLimiter;
use crate::response::RawModRecord;
use crate::types::{HttpClient, WorkshopItemId};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

/// Client for workshop collection pages and `GetPublishedFileDetails`. Cloning is cheap and
/// clones share the same connection pool and rate limiter.
#[derive(Debug, Clone)]
pub struct SteamWorkshopAPI {
    client: HttpClient,
    collection_url_template: String,
    published_file_details_url: String,
    user_agent: String,
    rate_limiter: Option<RequestLimiter>,
}

impl SteamWorkshopAPI {
    /// Builder for new API.
    pub fn builder() -> SteamWorkshopAPIBuilder {
        SteamWorkshopAPIBuilder::new()
    }

    /// Gets the IDs of the items in a collection, in the order they appear on the collection
    /// page. Steam has no API for collections so this scrapes the page.
    pub async fn get_collection_item_ids(
        &self,
        collection_id: &str,
    ) -> Result<Vec<WorkshopItemId>, Error> {
        let url = helpers::collection_url(&self.collection_url_template, collection_id)?;
        let response = self.client.get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;
        let body = check_response(response).await?;
        let body = String::from_utf8(body.to_vec())
            .map_err(|_| Error::Response("Collection page is not valid UTF-8".into()))?;

        Ok(parse_collection_item_ids(&body))
    }

    /// Same as [`SteamWorkshopAPI::get_collection_item_ids`] but a failure is logged and gives no
    /// items.
    pub async fn discover_members(
        &self,
        collection_id: &str,
    ) -> Vec<WorkshopItemId> {
        match self.get_collection_item_ids(collection_id).await {
            Ok(ids) => ids,
            Err(error) => {
                let url = self.collection_url_template.replace(COLLECTION_ID_PLACEHOLDER, collection_id);
                
                log::warn!("Failed to fetch collection {collection_id} ({url}): {error}");
                Vec::new()
            },
        }
    }

    /// Gets details for many workshop items in a single request. Steam may return the records in
    /// any order and may leave some out. No request is made when `ids` is empty.
    pub async fn get_published_file_details(
        &self,
        ids: &[WorkshopItemId],
    ) -> Result<Vec<RawModRecord>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(rate_limiter) = &self.rate_limiter {
            rate_limiter.until_ready().await;
        }

        let response = self.client.post(&self.published_file_details_url)
            .header(USER_AGENT, &self.user_agent)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(published_file_details_form(ids))
            .send()
            .await?;
        let body: GetPublishedFileDetailsResponse = parses_response(response).await?;

        Ok(body.into_records())
    }

    /// Gets details for a single workshop item.
    pub async fn get_published_file_detail(
        &self,
        id: &WorkshopItemId,
    ) -> Result<Option<RawModRecord>, Error> {
        let records = self.get_published_file_details(std::slice::from_ref(id)).await?;

        Ok(records.into_iter().next())
    }

    /// Same as [`SteamWorkshopAPI::get_published_file_details`] but a failure is logged and gives
    /// no records.
    pub async fn fetch_batch(
        &self,
        ids: &[WorkshopItemId],
    ) -> Vec<RawModRecord> {
        match self.get_published_file_details(ids).await {
            Ok(records) => records,
            Err(error) => {
                log::warn!(
                    "Failed to fetch details for workshop items [{}] ({}): {error}",
                    ids.join(", "),
                    self.published_file_details_url,
                );
                Vec::new()
            },
        }
    }

    /// Same as [`SteamWorkshopAPI::get_published_file_detail`] but a failure is logged and gives
    /// `None`.
    pub async fn fetch_one(
        &self,
        id: &WorkshopItemId,
    ) -> Option<RawModRecord> {
        match self.get_published_file_detail(id).await {
            Ok(record) => record,
            Err(error) => {
                log::warn!("Failed to fetch details for workshop item {id}: {error}");
                None
            },
        }
    }
}
