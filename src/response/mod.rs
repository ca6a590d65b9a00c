//! Models for Steam responses and resolved mods.

mod raw_mod_record;
mod mod_details;

pub use raw_mod_record::{RawModRecord, Tag, RESULT_OK};
pub use mod_details::ModDetails;
