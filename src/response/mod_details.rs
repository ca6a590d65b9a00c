use crate::types::WorkshopItemId;
use std::collections::HashSet;
use serde::{Serialize, Deserialize};

/// A resolved workshop item. When `mod_id` is `None` the item could not be made usable: it was
/// missing from the response, Steam reported a failure for it, or its description names no
/// mod ID.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModDetails {
    /// The mod ID as written in the item's description.
    pub mod_id: Option<String>,
    /// The workshop item this was resolved from.
    pub workshop_id: WorkshopItemId,
    /// Map folders referenced in the description.
    pub maps: HashSet<String>,
    /// URL to the item's preview image. `None` for unresolved items.
    pub thumbnail: Option<String>,
}

impl ModDetails {
    /// An unresolved item for `workshop_id`.
    pub fn unresolved(workshop_id: WorkshopItemId) -> Self {
        Self {
            mod_id: None,
            workshop_id,
            maps: HashSet::new(),
            thumbnail: None,
        }
    }
    
    /// Whether a mod ID was recovered for this item.
    pub fn is_resolved(&self) -> bool {
        self.mod_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn serializes_camel_case() {
        let details = ModDetails {
            mod_id: Some("MyMod".into()),
            workshop_id: "123".into(),
            maps: HashSet::from(["Riverside".to_string()]),
            thumbnail: Some("/placeholder.svg".into()),
        };
        let json = serde_json::to_value(&details).unwrap();
        
        assert_eq!(json["modId"], "MyMod");
        assert_eq!(json["workshopId"], "123");
        assert_eq!(json["maps"][0], "Riverside");
        assert_eq!(json["thumbnail"], "/placeholder.svg");
    }
    
    #[test]
    fn unresolved_has_no_mod_id() {
        let details = ModDetails::unresolved("123".into());
        
        assert!(!details.is_resolved());
        assert!(details.maps.is_empty());
        assert!(details.thumbnail.is_none());
    }
}
