//! Resolves Steam Workshop collections into mod metadata.
//! 
//! A collection's items are scraped from its page, their details are fetched from
//! `GetPublishedFileDetails` in a single request, and each item's description is parsed for
//! its mod ID and map folders.

pub mod api;
pub mod config;
pub mod error;
pub mod helpers;
pub mod manager;
pub mod rate_limiter;
pub mod resolver;
pub mod response;
pub mod serialize;
pub mod time;
pub mod types;

pub use api::{SteamWorkshopAPI, SteamWorkshopAPIBuilder};
pub use config::Config;
pub use error::Error;
pub use manager::WorkshopManager;
pub use rate_limiter::RequestLimiter;
pub use resolver::{resolve, parse_record};
pub use response::{ModDetails, RawModRecord};
pub use types::WorkshopItemId;
