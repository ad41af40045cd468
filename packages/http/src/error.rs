#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: http::StatusCode,
        url: url::Url,
        body: String,
    },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
