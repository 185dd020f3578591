use std::fmt;

#[derive(Debug)]
pub enum AtisError {
    Timeout,
    ConnectionFailed(String),
    DnsResolution(String),
    ProxyError(String),
    HttpStatus(u16),
    TlsError(String),
    Decode(String),
    InvalidAirport(String),
}

impl fmt::Display for AtisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(
                f,
                "request timed out — the ATIS service may be slow or unreachable. \
                 Try increasing --timeout or check your connection"
            ),
            Self::ConnectionFailed(detail) => write!(
                f,
                "connection failed — check your internet connection ({detail})"
            ),
            Self::DnsResolution(host) => write!(
                f,
                "DNS resolution failed for {host} — check your internet connection"
            ),
            Self::ProxyError(detail) => write!(
                f,
                "proxy error — check your --proxy URL is correct ({detail})"
            ),
            Self::HttpStatus(status) => write!(
                f,
                "ATIS service returned HTTP {status}"
            ),
            Self::TlsError(detail) => write!(
                f,
                "TLS/SSL error — connection to the ATIS service failed ({detail})"
            ),
            Self::Decode(detail) => write!(
                f,
                "failed to decode ATIS service response — {detail}"
            ),
            Self::InvalidAirport(code) => write!(
                f,
                "unsupported airport code \"{code}\" — run `datis airports` \
                 to list supported ICAO codes"
            ),
        }
    }
}

impl std::error::Error for AtisError {}

pub fn from_http_error(err: wreq::Error) -> AtisError {
    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if err.is_timeout() {
        return AtisError::Timeout;
    }

    if err.is_connect() {
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("getaddrinfo") {
            return AtisError::DnsResolution(msg);
        }
        return AtisError::ConnectionFailed(msg);
    }

    if lower.contains("proxy") || lower.contains("socks") {
        return AtisError::ProxyError(msg);
    }

    if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        return AtisError::TlsError(msg);
    }

    if lower.contains("builder error") && lower.contains("uri") {
        return AtisError::ProxyError(msg);
    }

    if msg.is_empty() {
        return AtisError::ConnectionFailed("unknown error".to_string());
    }

    AtisError::ConnectionFailed(msg)
}
