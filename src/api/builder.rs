use super::SteamWorkshopAPI;
use super::helpers::COLLECTION_ID_PLACEHOLDER;
use crate::error::Error;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use crate::rate_limiter::{RequestLimiter, DEFAULT_REQUEST_INTERVAL};
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;

/// The default collection page URL template.
pub const DEFAULT_COLLECTION_URL_TEMPLATE: &str = "https://steamcommunity.com/sharedfiles/filedetails/?id={id}";
/// The default URL for `GetPublishedFileDetails`.
pub const DEFAULT_PUBLISHED_FILE_DETAILS_URL: &str = "https://api.steampowered.com/ISteamRemoteStorage/GetPublishedFileDetails/v1/";

/// Builder for constructing a [`SteamWorkshopAPI`].
#[derive(Debug, Clone)]
pub struct SteamWorkshopAPIBuilder {
    /// The collection page URL. `{id}` is replaced with the collection ID.
    pub(crate) collection_url_template: String,
    /// The URL for `GetPublishedFileDetails`.
    pub(crate) published_file_details_url: String,
    /// User agent for requests. Sent on every request, including with a supplied client.
    pub(crate) user_agent: String,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// Limiter applied before each metadata request. `None` disables limiting.
    pub(crate) rate_limiter: Option<RequestLimiter>,
}

impl Default for SteamWorkshopAPIBuilder {
    fn default() -> Self {
        Self {
            collection_url_template: DEFAULT_COLLECTION_URL_TEMPLATE.into(),
            published_file_details_url: DEFAULT_PUBLISHED_FILE_DETAILS_URL.into(),
            user_agent: USER_AGENT_STRING.into(),
            client: None,
            rate_limiter: Some(RequestLimiter::new(DEFAULT_REQUEST_INTERVAL)),
        }
    }
}

impl SteamWorkshopAPIBuilder {
    /// Creates a new [`SteamWorkshopAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// The collection page URL template. Must contain `{id}`, which is replaced with the
    /// collection ID.
    pub fn collection_url_template<T>(mut self, template: T) -> Self
    where
        T: Into<String>,
    {
        self.collection_url_template = template.into();
        self
    }
    
    /// The URL for `GetPublishedFileDetails`.
    pub fn published_file_details_url<T>(mut self, url: T) -> Self
    where
        T: Into<String>,
    {
        self.published_file_details_url = url.into();
        self
    }
    
    /// The user agent for requests. Steam rejects default client agents so this should look like
    /// a browser.
    pub fn user_agent<T>(mut self, user_agent: T) -> Self
    where
        T: Into<String>,
    {
        self.user_agent = user_agent.into();
        self
    }
    
    /// Client to use for requests. The configured user agent is still sent with each request.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }
    
    /// The limiter to use for metadata requests. Share one limiter between APIs to throttle them
    /// together.
    pub fn rate_limiter(mut self, rate_limiter: RequestLimiter) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }
    
    /// The minimum interval between metadata requests. Zero disables limiting.
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.rate_limiter = RequestLimiter::with_interval(interval);
        self
    }
    
    /// Builds the [`SteamWorkshopAPI`].
    pub fn build(self) -> Result<SteamWorkshopAPI, Error> {
        if !self.collection_url_template.contains(COLLECTION_ID_PLACEHOLDER) {
            return Err(Error::Parameter("Collection URL template is missing the {id} placeholder"));
        }
        
        let client = match self.client {
            Some(client) => client,
            None => get_default_middleware(&self.user_agent)?,
        };
        
        Ok(SteamWorkshopAPI {
            client,
            collection_url_template: self.collection_url_template,
            published_file_details_url: self.published_file_details_url,
            user_agent: self.user_agent,
            rate_limiter: self.rate_limiter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn rejects_template_without_placeholder() {
        let result = SteamWorkshopAPIBuilder::new()
            .collection_url_template("https://steamcommunity.com/sharedfiles/filedetails/")
            .build();
        
        assert!(matches!(result, Err(Error::Parameter(_))));
    }
    
    #[test]
    fn zero_interval_disables_rate_limiter() {
        let builder = SteamWorkshopAPIBuilder::new()
            .request_interval(Duration::ZERO);
        
        assert!(builder.rate_limiter.is_none());
    }
    
    #[test]
    fn defaults_to_throttled_requests() {
        let builder = SteamWorkshopAPIBuilder::new();
        
        assert_eq!(builder.rate_limiter.map(|limiter| limiter.interval()), Some(DEFAULT_REQUEST_INTERVAL));
    }
}
