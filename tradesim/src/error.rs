use reqwest::StatusCode;
use thiserror::Error;
use tradesim_integration::error::SocketError;

/// Shown when a failure carries no description of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// All errors generated while executing a simulation request.
///
/// Every variant converges to a single human-readable message via [`SimulateError::message`].
#[derive(Debug, Error)]
pub enum SimulateError {
    /// Network, Url or (de)serialisation failure.
    #[error("{0}")]
    Socket(#[from] SocketError),

    /// Non-success status code. The message is the service provided error if the body could be
    /// parsed, otherwise a generic message including the status code.
    #[error("{message}")]
    HttpStatus { status: StatusCode, message: String },

    /// Successful status code carrying an embedded service error.
    #[error("{0}")]
    Api(String),
}

impl SimulateError {
    /// Human-readable message describing this error.
    ///
    /// Deserialisation failures describe the JSON error only, the offending payload is logged
    /// where it was received.
    pub fn message(&self) -> String {
        let message = match self {
            SimulateError::Socket(SocketError::DeserialiseBinary { error, .. }) => {
                format!("Deserialising JSON error: {error}")
            }
            error => error.to_string(),
        };
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// A simulation was submitted while another was still in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("simulation already in flight, submission rejected")]
pub struct SubmitRejected;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        struct TestCase {
            input: SimulateError,
            expected: &'static str,
        }

        let cases = vec![
            TestCase {
                // TC0: service provided error message
                input: SimulateError::Api("Insufficient liquidity".to_string()),
                expected: "Insufficient liquidity",
            },
            TestCase {
                // TC1: synthesised http status message
                input: SimulateError::HttpStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    message: "HTTP error! status: 503".to_string(),
                },
                expected: "HTTP error! status: 503",
            },
            TestCase {
                // TC2: empty service message falls back to generic message
                input: SimulateError::Api(String::new()),
                expected: FALLBACK_ERROR_MESSAGE,
            },
            TestCase {
                // TC3: deserialisation failure omits the payload
                input: SimulateError::from(SocketError::DeserialiseBinary {
                    error: serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err(),
                    payload: b"<html>".to_vec(),
                }),
                expected: "Deserialising JSON error: expected value at line 1 column 1",
            },
            TestCase {
                // TC4: url failure uses its own description
                input: SimulateError::from(SocketError::from(
                    url::ParseError::RelativeUrlWithoutBase,
                )),
                expected: "error parsing Url: relative URL without a base",
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            assert_eq!(test.input.message(), test.expected, "TC{index} failed");
        }
    }
}
