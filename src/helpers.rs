use crate::error::Error;
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use lazy_regex::regex_captures;

/// Steam rejects requests from default client agents.
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Builds the default client with the given user agent applied to every request.
pub fn get_default_middleware(user_agent_string: &str) -> Result<ClientWithMiddleware, Error> {
    let mut headers = header::HeaderMap::new();
    let user_agent = header::HeaderValue::from_str(user_agent_string)
        .map_err(|_| Error::Parameter("User agent contains invalid header characters"))?;

    headers.insert(header::USER_AGENT, user_agent);

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()?;

    Ok(ClientBuilder::new(client).build())
}

/// Checks the status of a response, returning its body on success.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    if !status.is_success() {
        return Err(Error::Http(status));
    }

    Ok(response.bytes().await?)
}

/// Checks the status of a response then deserializes its body as JSON.
pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    match serde_json::from_slice::<D>(&body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            // Steam serves an HTML error page when it rejects a request
            let html = String::from_utf8_lossy(&body);

            if let Some((_, message)) = regex_captures!(r#"<title>([^<]+)</title>"#, &html) {
                Err(Error::Response(message.trim().into()))
            } else {
                Err(Error::Parse(parse_error))
            }
        }
    }
}
