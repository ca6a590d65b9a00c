//! Reconciles requested workshop IDs with the records Steam returned for them.

pub mod patterns;

use crate::response::{ModDetails, RawModRecord};
use crate::types::WorkshopItemId;
use std::collections::HashMap;

/// Thumbnail used when an item has no preview image.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg";

/// Resolves `ids` against `records`. The result has one [`ModDetails`] per ID in the same order
/// as `ids`, regardless of the order of `records`. IDs without a record are unresolved.
pub fn resolve(
    ids: &[WorkshopItemId],
    records: &[RawModRecord],
) -> Vec<ModDetails> {
    // built lazily since most responses preserve the requested order
    let mut records_by_id: Option<HashMap<&str, &RawModRecord>> = None;

    ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let record = match records.get(i) {
                Some(record) if record.publishedfileid == *id => Some(record),
                _ => records_by_id
                    .get_or_insert_with(|| index_records(records))
                    .get(id.as_str())
                    .copied(),
            };

            match record {
                Some(record) => parse_record(record),
                None => {
                    log::debug!("No record returned for workshop item {id}");
                    ModDetails::unresolved(id.clone())
                },
            }
        })
        .collect()
}

/// Maps each echoed ID to the first record carrying it.
fn index_records(records: &[RawModRecord]) -> HashMap<&str, &RawModRecord> {
    let mut map = HashMap::with_capacity(records.len());

    for record in records {
        map.entry(record.publishedfileid.as_str()).or_insert(record);
    }

    map
}

/// Parses a single record into [`ModDetails`]. Records with a failure result or without a mod ID
/// in their description are unresolved.
pub fn parse_record(record: &RawModRecord) -> ModDetails {
    let workshop_id = record.publishedfileid.clone();

    if !record.is_success() {
        log::debug!("Workshop item {workshop_id} returned result {}", record.result);
        return ModDetails::unresolved(workshop_id);
    }

    let thumbnail = record.preview_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_THUMBNAIL)
        .to_string();
    let description = record.description.as_deref();
    let maps = description
        .map(patterns::extract_maps)
        .unwrap_or_default();

    match description.and_then(patterns::extract_mod_id) {
        Some(mod_id) => ModDetails {
            mod_id: Some(mod_id),
            workshop_id,
            maps,
            thumbnail: Some(thumbnail),
        },
        None => {
            log::debug!("No mod ID found in description of workshop item {workshop_id}");
            ModDetails::unresolved(workshop_id)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::seq::SliceRandom;

    fn record(id: &str, description: &str) -> RawModRecord {
        RawModRecord {
            result: 1,
            publishedfileid: id.into(),
            title: Some(format!("Item {id}")),
            description: Some(description.into()),
            preview_url: Some(format!("https://images.example/{id}.jpg")),
            ..Default::default()
        }
    }

    fn ids(ids: &[&str]) -> Vec<WorkshopItemId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn sample_records(count: usize) -> Vec<RawModRecord> {
        (0..count)
            .map(|i| record(&(1000 + i).to_string(), &format!("Mod ID: Mod{i}\nMap Folder: Map{i}")))
            .collect()
    }

    #[test]
    fn resolves_in_order() {
        let records = sample_records(5);
        let requested = records.iter().map(|record| record.publishedfileid.clone()).collect::<Vec<_>>();
        let resolved = resolve(&requested, &records);

        assert_eq!(resolved.len(), 5);

        for (i, details) in resolved.iter().enumerate() {
            assert_eq!(details.workshop_id, requested[i]);
            assert_eq!(details.mod_id, Some(format!("Mod{i}")));
            assert_eq!(details.maps, HashSet::from([format!("Map{i}")]));
        }
    }

    #[test]
    fn fast_path_matches_fallback() {
        let records = sample_records(8);
        let requested = records.iter().map(|record| record.publishedfileid.clone()).collect::<Vec<_>>();
        let mut reversed = records.clone();

        reversed.reverse();

        assert_eq!(resolve(&requested, &records), resolve(&requested, &reversed));
    }

    #[test]
    fn resolves_permuted_records() {
        let records = sample_records(50);
        let requested = records.iter().map(|record| record.publishedfileid.clone()).collect::<Vec<_>>();
        let expected = records.iter().map(parse_record).collect::<Vec<_>>();
        let mut shuffled = records.clone();

        shuffled.shuffle(&mut rand::rng());

        assert_eq!(resolve(&requested, &shuffled), expected);
    }

    #[test]
    fn missing_record_is_unresolved() {
        let records = vec![record("1", "Mod ID: One"), record("3", "Mod ID: Three")];
        let resolved = resolve(&ids(&["1", "2", "3"]), &records);

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].mod_id.as_deref(), Some("One"));
        assert_eq!(resolved[1], ModDetails::unresolved("2".into()));
        assert_eq!(resolved[2].mod_id.as_deref(), Some("Three"));
    }

    #[test]
    fn empty_records_are_all_unresolved() {
        let resolved = resolve(&ids(&["1", "2"]), &[]);

        assert_eq!(resolved, vec![
            ModDetails::unresolved("1".into()),
            ModDetails::unresolved("2".into()),
        ]);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_record() {
        let records = vec![
            record("7", "Mod ID: Seven"),
            record("8", "Mod ID: Eight"),
            record("8", "Mod ID: EightAgain"),
        ];
        let resolved = resolve(&ids(&["8", "7", "8"]), &records);

        assert_eq!(resolved[0].mod_id.as_deref(), Some("Eight"));
        assert_eq!(resolved[1].mod_id.as_deref(), Some("Seven"));
        // same position with a matching ID uses the record at that position
        assert_eq!(resolved[2].mod_id.as_deref(), Some("EightAgain"));
    }

    #[test]
    fn failed_result_is_unresolved() {
        let mut failed = record("5", "Mod ID: WellFormed");

        failed.result = 9;

        assert_eq!(parse_record(&failed), ModDetails::unresolved("5".into()));
    }

    #[test]
    fn parses_mod_id_and_maps() {
        let details = parse_record(&record("10", "Mod ID: MyMod\nMap Folder: Riverside"));

        assert_eq!(details.mod_id.as_deref(), Some("MyMod"));
        assert_eq!(details.maps, HashSet::from(["Riverside".to_string()]));
        assert_eq!(details.thumbnail.as_deref(), Some("https://images.example/10.jpg"));
    }

    #[test]
    fn maps_without_mod_id_is_unresolved() {
        let details = parse_record(&record("11", "Map: Muldraugh, KY\nFolder: Muldraugh_KY"));

        assert_eq!(details, ModDetails::unresolved("11".into()));
    }

    #[test]
    fn missing_description_is_unresolved() {
        let mut no_description = record("12", "");

        no_description.description = None;

        assert_eq!(parse_record(&no_description), ModDetails::unresolved("12".into()));
    }

    #[test]
    fn uses_placeholder_thumbnail() {
        let mut empty_preview = record("13", "Mod ID: Empty");
        let mut missing_preview = record("14", "Mod ID: Missing");

        empty_preview.preview_url = Some(String::new());
        missing_preview.preview_url = None;

        assert_eq!(parse_record(&empty_preview).thumbnail.as_deref(), Some(PLACEHOLDER_THUMBNAIL));
        assert_eq!(parse_record(&missing_preview).thumbnail.as_deref(), Some(PLACEHOLDER_THUMBNAIL));
    }
}
