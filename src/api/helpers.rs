use crate::error::Error;
use crate::types::WorkshopItemId;
use lazy_regex::regex;
use url::{Url, form_urlencoded};

/// The placeholder substituted with the collection ID in collection URL templates.
pub const COLLECTION_ID_PLACEHOLDER: &str = "{id}";

/// Formats the collection ID into the collection page URL template.
pub fn collection_url(
    template: &str,
    collection_id: &str,
) -> Result<Url, Error> {
    let collection_id = form_urlencoded::byte_serialize(collection_id.as_bytes())
        .collect::<String>();
    let url = template.replace(COLLECTION_ID_PLACEHOLDER, &collection_id);
    
    Ok(Url::parse(&url)?)
}

/// Builds the form body for `GetPublishedFileDetails`.
/// 
/// Format: `itemcount=N&publishedfileids[0]=id0&publishedfileids[1]=id1&...`
pub fn published_file_details_form(ids: &[WorkshopItemId]) -> String {
    let mut form = format!("itemcount={}", ids.len());
    
    for (i, id) in ids.iter().enumerate() {
        let id = form_urlencoded::byte_serialize(id.as_bytes()).collect::<String>();
        
        form.push_str(&format!("&publishedfileids[{i}]={id}"));
    }
    
    form
}

/// Collects the IDs of every item on a collection page in the order they appear. Duplicates
/// are kept.
pub fn parse_collection_item_ids(body: &str) -> Vec<WorkshopItemId> {
    regex!(r#"id="sharedfile_(\d+)""#)
        .captures_iter(body)
        .filter_map(|capture| capture.get(1))
        .map(|id| id.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn parses_collection_fixture() {
        let body = include_str!("fixtures/collection.html");
        let ids = parse_collection_item_ids(body);
        
        assert_eq!(ids, vec!["2169435993", "2392709985", "2282429356"]);
    }
    
    #[test]
    fn keeps_duplicate_item_ids() {
        let body = r#"
            <div id="sharedfile_123" class="collectionItem"></div>
            <div id="sharedfile_123" class="collectionItem"></div>
            <div id="sharedfile_456" class="collectionItem"></div>
        "#;
        
        assert_eq!(parse_collection_item_ids(body), vec!["123", "123", "456"]);
    }
    
    #[test]
    fn ignores_other_markup() {
        let body = r#"<a href="?id=789"></a><div id='sharedfile_1'></div><div id="sharedfile_"></div>"#;
        
        assert!(parse_collection_item_ids(body).is_empty());
    }
    
    #[test]
    fn builds_form() {
        let ids = vec!["111".to_string(), "222".to_string()];
        
        assert_eq!(
            published_file_details_form(&ids),
            "itemcount=2&publishedfileids[0]=111&publishedfileids[1]=222",
        );
        assert_eq!(published_file_details_form(&[]), "itemcount=0");
    }
    
    #[test]
    fn formats_collection_url() {
        let url = collection_url(
            "https://steamcommunity.com/sharedfiles/filedetails/?id={id}",
            "2772575623",
        ).unwrap();
        
        assert_eq!(url.as_str(), "https://steamcommunity.com/sharedfiles/filedetails/?id=2772575623");
    }
    
    #[test]
    fn rejects_invalid_collection_url() {
        assert!(matches!(collection_url("not a url {id}", "1"), Err(Error::Url(_))));
    }
}
