use crate::types::{ResultCode, ServerTime, WorkshopItemId};
use crate::serialize;
use std::collections::HashSet;
use serde::{Serialize, Deserialize};

/// The `EResult` code Steam sends for an item that was found.
pub const RESULT_OK: ResultCode = 1;

/// Details about a workshop item as returned by `GetPublishedFileDetails`. Steam only sends
/// `result` and `publishedfileid` for items which were not found or were removed, so every
/// other field is defaulted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct RawModRecord {
    /// The result code for this item. `1` is success, anything else means the item can't be used.
    #[serde(default)]
    pub result: ResultCode,
    /// The ID of the item, echoed back from the request.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number_as_string")]
    pub publishedfileid: WorkshopItemId,
    /// The SteamID of the creator.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Size of the item's content in bytes.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "serialize::option_string_or_number")]
    pub file_size: Option<i64>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "serialize::ts_seconds_option_none_when_zero")]
    pub time_created: Option<ServerTime>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "serialize::ts_seconds_option_none_when_zero")]
    pub time_updated: Option<ServerTime>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The free-text description written by the author. The mod ID and map folders are parsed
    /// from this.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL to the preview image.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_default")]
    pub tags: Vec<Tag>,
}

impl RawModRecord {
    /// Whether Steam reported this item as found.
    pub fn is_success(&self) -> bool {
        self.result == RESULT_OK
    }
    
    /// The set of tag names on this item.
    pub fn tag_names(&self) -> HashSet<&str> {
        self.tags
            .iter()
            .map(|tag| tag.tag.as_str())
            .collect()
    }
}

/// A tag on a workshop item, e.g. `"Build 41"`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Tag {
    pub tag: String,
}
