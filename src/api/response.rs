//! Response envelopes from the Steam Web API.

use crate::response::RawModRecord;
use crate::serialize;
use serde::Deserialize;

/// The envelope of a `GetPublishedFileDetails` response.
#[derive(Deserialize, Debug, Default)]
pub struct GetPublishedFileDetailsResponse {
    #[serde(default)]
    pub response: Option<GetPublishedFileDetailsResponseBody>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GetPublishedFileDetailsResponseBody {
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_default")]
    pub publishedfiledetails: Vec<RawModRecord>,
}

impl GetPublishedFileDetailsResponse {
    /// The records in this response. A missing body gives no records.
    pub fn into_records(self) -> Vec<RawModRecord> {
        self.response
            .map(|body| body.publishedfiledetails)
            .unwrap_or_default()
    }
}
