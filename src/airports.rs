use crate::error::AtisError;

pub const DEFAULT_AIRPORT: &str = "RJTT";

/// Closed set of airports the D-ATIS service publishes broadcasts for.
pub const AIRPORTS: [(&str, &str); 7] = [
    ("RJTT", "Tokyo Haneda"),
    ("RJAA", "Tokyo Narita"),
    ("RJBB", "Osaka Kansai"),
    ("RJSS", "Sendai"),
    ("RJOO", "Osaka Itami"),
    ("RJFF", "Fukuoka"),
    ("RJFK", "Kagoshima"),
];

pub fn name(code: &str) -> Option<&'static str> {
    AIRPORTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn validate(code: &str) -> Result<(), AtisError> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(AtisError::InvalidAirport(code.to_string()));
    }
    if name(code).is_none() {
        return Err(AtisError::InvalidAirport(code.to_string()));
    }
    Ok(())
}
