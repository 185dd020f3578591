use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceType {
    #[serde(rename = "ARR")]
    Arrival,
    #[serde(rename = "DEP")]
    Departure,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arrival => write!(f, "ARR"),
            Self::Departure => write!(f, "DEP"),
        }
    }
}

/// Fields extracted from one raw ATIS transcript. String fields stay empty
/// (and `service` stays `None`) when the transcript has no matching line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedAtis {
    pub facility: String,
    pub service: Option<ServiceType>,
    pub letter: String,
    pub time_group: String,
    pub body: Vec<String>,
}

struct HeaderLine {
    facility: String,
    service: ServiceType,
    letter: Option<char>,
}

/// Matches `XXXX ARR ATIS` / `XXXX DEP ATIS` at the start of a line, where
/// XXXX is exactly 4 uppercase letters. The information letter is a single
/// uppercase character after `ATIS ` and may be absent.
fn match_header(line: &str) -> Option<HeaderLine> {
    let facility = line.get(..4)?;
    if !facility.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let rest = line.get(4..)?.strip_prefix(' ')?;
    let (service, rest) = if let Some(rest) = rest.strip_prefix("ARR") {
        (ServiceType::Arrival, rest)
    } else if let Some(rest) = rest.strip_prefix("DEP") {
        (ServiceType::Departure, rest)
    } else {
        return None;
    };
    let rest = rest.strip_prefix(' ')?.strip_prefix("ATIS")?;

    let letter = rest
        .strip_prefix(' ')
        .and_then(|r| r.chars().next())
        .filter(|c| c.is_ascii_uppercase());

    Some(HeaderLine {
        facility: facility.to_string(),
        service,
        letter,
    })
}

/// Matches a time group line: exactly 4 ASCII digits followed by `Z` at the
/// start of the line.
fn is_time_group(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 5
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'Z'
}

/// Extracts structured fields from a raw transcript. Total: unmatched
/// patterns leave their fields empty rather than failing.
///
/// Each line matches at most one of three patterns, tested in priority
/// order: header, time group, content. Header and time group are
/// first-match-wins; later lines matching either pattern are consumed but
/// ignored. Content lines are trimmed and collected in order; blank lines
/// are dropped.
pub fn parse_broadcast(raw: &str) -> ParsedAtis {
    let mut parsed = ParsedAtis::default();

    for line in raw.lines() {
        if let Some(header) = match_header(line) {
            if parsed.service.is_none() {
                if let Some(letter) = header.letter {
                    parsed.facility = header.facility;
                    parsed.service = Some(header.service);
                    parsed.letter = letter.to_string();
                }
            }
        } else if is_time_group(line) {
            if parsed.time_group.is_empty() {
                parsed.time_group = line.to_string();
            }
        } else {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                parsed.body.push(trimmed.to_string());
            }
        }
    }

    parsed
}
