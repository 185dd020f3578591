pub mod airports;
pub mod display;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod viewer;

use error::AtisError;
use fetch::FetchOptions;
use model::AtisData;

pub async fn fetch(code: &str, options: &FetchOptions) -> Result<AtisData, AtisError> {
    fetch::fetch_atis(code, options).await
}
