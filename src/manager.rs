//! Resolves collections and workshop items into [`ModDetails`].

use crate::api::SteamWorkshopAPI;
use crate::error::Error;
use crate::resolver;
use crate::response::ModDetails;
use crate::types::WorkshopItemId;
use tokio::task::JoinHandle;

/// Composes collection discovery, the batch metadata request and resolution. Each call makes at
/// most one collection request and one metadata request.
#[derive(Debug, Clone)]
pub struct WorkshopManager {
    api: SteamWorkshopAPI,
}

impl From<SteamWorkshopAPI> for WorkshopManager {
    fn from(api: SteamWorkshopAPI) -> Self {
        Self::new(api)
    }
}

impl WorkshopManager {
    pub fn new(api: SteamWorkshopAPI) -> Self {
        Self {
            api,
        }
    }

    /// The underlying API.
    pub fn api(&self) -> &SteamWorkshopAPI {
        &self.api
    }

    /// Gets the IDs of the items in a collection. Failures are logged and give no items.
    pub async fn get_collection_ids(
        &self,
        collection_id: &str,
    ) -> Vec<WorkshopItemId> {
        self.api.discover_members(collection_id).await
    }

    /// Resolves `ids` on a background task. The details are in the same order as `ids`. If the
    /// request fails every item is unresolved.
    pub fn get_mod_details(
        &self,
        ids: Vec<WorkshopItemId>,
    ) -> JoinHandle<Vec<ModDetails>> {
        let api = self.api.clone();

        tokio::spawn(async move {
            let records = api.fetch_batch(&ids).await;

            resolver::resolve(&ids, &records)
        })
    }

    /// Resolves `ids`, returning an error if the request fails rather than treating every item as
    /// unresolved.
    pub async fn try_get_mod_details(
        &self,
        ids: &[WorkshopItemId],
    ) -> Result<Vec<ModDetails>, Error> {
        let records = self.api.get_published_file_details(ids).await?;

        Ok(resolver::resolve(ids, &records))
    }

    /// Resolves every item in a collection. Failures are logged: a failed collection request
    /// gives no items and a failed metadata request leaves every item unresolved.
    pub async fn resolve_collection(
        &self,
        collection_id: &str,
    ) -> Vec<ModDetails> {
        let ids = self.get_collection_ids(collection_id).await;

        match self.get_mod_details(ids.clone()).await {
            Ok(details) => details,
            Err(error) => {
                log::warn!("Resolving collection {collection_id} did not complete: {error}");
                ids
                    .into_iter()
                    .map(ModDetails::unresolved)
                    .collect()
            },
        }
    }

    /// Resolves every item in a collection, returning the first error encountered.
    pub async fn try_resolve_collection(
        &self,
        collection_id: &str,
    ) -> Result<Vec<ModDetails>, Error> {
        let ids = self.api.get_collection_item_ids(collection_id).await?;

        self.try_get_mod_details(&ids).await
    }
}
