//! Ticketing API error types.

/// Errors from the ticketing HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}{}", suffix(" (body: ", .body, ")"))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response parsed but carried no usable `data` member
    #[error("response carried no data{}", suffix(": ", .message, ""))]
    MissingData { message: Option<String> },
}

fn suffix(open: &str, detail: &Option<String>, close: &str) -> String {
    match detail {
        Some(d) => format!("{open}{d}{close}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ApiError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = ApiError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value (body: <html>)");

        let err = ApiError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = ApiError::MissingData { message: None };
        assert_eq!(err.to_string(), "response carried no data");

        let err = ApiError::MissingData {
            message: Some("系统繁忙".into()),
        };
        assert_eq!(err.to_string(), "response carried no data: 系统繁忙");
    }
}
