use std::time::Duration;

use wreq::Client;

use crate::error::{self, AtisError};
use crate::model::AtisData;

pub const DEFAULT_BASE_URL: &str = "https://d-atis-api.kenta-722-768.workers.dev";

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub base_url: String,
    pub proxy: Option<String>,
    pub timeout: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            timeout: 30,
        }
    }
}

pub async fn fetch_atis(
    code: &str,
    options: &FetchOptions,
) -> Result<AtisData, AtisError> {
    let mut builder = Client::builder().timeout(Duration::from_secs(options.timeout));

    if let Some(ref proxy) = options.proxy {
        builder = builder.proxy(
            wreq::Proxy::all(proxy).map_err(error::from_http_error)?,
        );
    }

    let client = builder.build().map_err(error::from_http_error)?;

    let url = format!("{}/{}", options.base_url.trim_end_matches('/'), code);

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(error::from_http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(AtisError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(error::from_http_error)?;
    serde_json::from_str(&body).map_err(|e| AtisError::Decode(e.to_string()))
}
