use crate::airports;
use crate::error::AtisError;
use crate::fetch::{self, FetchOptions};
use crate::model::AtisData;
use crate::parse::{self, ParsedAtis};

/// Stateful view controller: owns the selected airport, issues a fetch when
/// the selection changes, and holds the single current record or error.
///
/// `refresh` takes `&mut self`, so loads on one viewer are serialized; a
/// later load always replaces whatever an earlier one stored.
pub struct Viewer {
    options: FetchOptions,
    selected: String,
    current: Option<AtisData>,
    last_error: Option<AtisError>,
    is_fetching: bool,
}

impl Viewer {
    /// `initial` is the externally supplied airport (e.g. a query parameter);
    /// falls back to the default airport when absent.
    pub fn new(initial: Option<&str>, options: FetchOptions) -> Self {
        Self {
            options,
            selected: initial.unwrap_or(airports::DEFAULT_AIRPORT).to_uppercase(),
            current: None,
            last_error: None,
            is_fetching: false,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn data(&self) -> Option<&AtisData> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&AtisError> {
        self.last_error.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Fetches the currently selected airport and replaces the held record
    /// wholesale. On any failure (HTTP status, transport, decode) the record
    /// is cleared and the error recorded, so a stale record is never shown
    /// next to an error. `is_fetching` is reset on every path.
    pub async fn refresh(&mut self) {
        self.is_fetching = true;
        self.last_error = None;

        match fetch::fetch_atis(&self.selected, &self.options).await {
            Ok(data) => {
                self.current = Some(data);
            }
            Err(err) => {
                self.current = None;
                self.last_error = Some(err);
            }
        }

        self.is_fetching = false;
    }

    /// User-facing selection: validates the code against the allow-list,
    /// stores it, then re-fetches. Rejected codes leave all state untouched
    /// and issue no request.
    pub async fn select(&mut self, code: &str) -> Result<(), AtisError> {
        let code = code.to_uppercase();
        airports::validate(&code)?;
        self.selected = code;
        self.refresh().await;
        Ok(())
    }

    /// Parsed arrival broadcast, recomputed from the current record on every
    /// call (never stored).
    pub fn arrival(&self) -> Option<ParsedAtis> {
        self.current
            .as_ref()
            .and_then(|d| d.arrival_atis.as_ref())
            .map(|info| parse::parse_broadcast(&info.raw))
    }

    /// Parsed departure broadcast, recomputed like `arrival`.
    pub fn departure(&self) -> Option<ParsedAtis> {
        self.current
            .as_ref()
            .and_then(|d| d.departure_atis.as_ref())
            .map(|info| parse::parse_broadcast(&info.raw))
    }
}
