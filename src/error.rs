use reqwest::StatusCode;

/// Any error that can occur while talking to Steam.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    #[error("Unexpected response: {}", .0)]
    Response(String),
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Error {}", .0)]
    Http(StatusCode),
    #[error("Invalid URL: {}", .0)]
    Url(#[from] url::ParseError),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An error loading [`crate::config::Config`] from the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {}: {}", .0, .1)]
    InvalidValue(&'static str, String),
    #[error("Error reading .env file: {}", .0)]
    EnvFile(#[from] dotenv::Error),
}
