use thiserror::Error;

/// All Http IO related errors generated in `tradesim-integration`.
#[derive(Debug, Error)]
pub enum SocketError {
    #[error("Deserialising JSON error: {error} for binary payload: {payload:?}")]
    DeserialiseBinary {
        error: serde_json::Error,
        payload: Vec<u8>,
    },

    #[error("SerDe url encoding serialisation error: {0}")]
    UrlEncoded(#[from] serde_urlencoded::ser::Error),

    #[error("error parsing Url: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_error_display() {
        struct TestCase {
            input: SocketError,
            expected: &'static str,
        }

        let cases = vec![
            TestCase {
                // TC0: Url parse failure
                input: SocketError::from(url::ParseError::RelativeUrlWithoutBase),
                expected: "error parsing Url: relative URL without a base",
            },
            TestCase {
                // TC1: deserialisation failure carries the payload for diagnostics
                input: SocketError::DeserialiseBinary {
                    error: serde_json::from_slice::<serde_json::Value>(b"x").unwrap_err(),
                    payload: b"x".to_vec(),
                },
                expected: "Deserialising JSON error: expected value at line 1 column 1 for binary payload: [120]",
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            assert_eq!(test.input.to_string(), test.expected, "TC{index} failed");
        }
    }
}
