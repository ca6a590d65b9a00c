//! Patterns for extracting data from workshop item descriptions.

use std::collections::HashSet;
use lazy_regex::{regex, Lazy, Regex};

/// A mod ID pattern. Patterns are tried in ascending `priority` and the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct ModIdPattern {
    pub priority: u8,
    pub regex: &'static Regex,
}

/// The mod ID patterns in the order they are tried. The first two and last two entries overlap
/// when matched case-insensitively. They are kept as separate entries.
static MOD_ID_PATTERNS: Lazy<[ModIdPattern; 4]> = Lazy::new(|| {
    let mut patterns = [
        ModIdPattern {
            priority: 0,
            regex: regex!(r"(?i)Mod[:\s]+ID[:\s]*([a-zA-Z0-9_.\-\s]+?)(?:\n|$)"),
        },
        ModIdPattern {
            priority: 1,
            regex: regex!(r"(?i)mod[:\s]+id[:\s]*([a-zA-Z0-9_.\-\s]+?)(?:\n|$)"),
        },
        ModIdPattern {
            priority: 2,
            regex: regex!(r"(?i)ModId[:\s]*([a-zA-Z0-9_.\-\s]+?)(?:\n|$)"),
        },
        ModIdPattern {
            priority: 3,
            regex: regex!(r"(?i)modid[:\s]*([a-zA-Z0-9_.\-\s]+?)(?:\n|$)"),
        },
    ];
    
    patterns.sort_by_key(|pattern| pattern.priority);
    patterns
});

/// The mod ID patterns, sorted by priority.
pub fn mod_id_patterns() -> &'static [ModIdPattern] {
    MOD_ID_PATTERNS.as_slice()
}

/// Extracts the mod ID from a description. `None` if no pattern matches or the match is blank.
pub fn extract_mod_id(description: &str) -> Option<String> {
    mod_id_patterns()
        .iter()
        .find_map(|pattern| pattern.regex.captures(description))
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str().trim().to_string())
        .filter(|mod_id| !mod_id.is_empty())
}

/// Extracts every map folder named in a description.
pub fn extract_maps(description: &str) -> HashSet<String> {
    regex!(r"(?i)(Map ?Folder|Folder|Map): ([\w., ]+)")
        .captures_iter(description)
        .filter_map(|captures| captures.get(2))
        .map(|capture| capture.as_str().trim().to_string())
        .collect()
}
