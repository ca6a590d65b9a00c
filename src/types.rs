//! Types for common values in Steam Workshop responses.

/// Identifies a single workshop item, e.g. `"2169435993"`. Compared by exact string match.
pub type WorkshopItemId = String;
/// A Steam `EResult` code. `1` is success.
pub type ResultCode = i32;

pub use crate::time::ServerTime;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
