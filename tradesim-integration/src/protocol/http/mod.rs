use self::rest::RestRequest;
use crate::error::SocketError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;

/// Defines an abstract [`RestRequest`] that can be executed by a fully
/// configurable [`RestClient`](rest::client::RestClient).
pub mod rest;

/// Defines a default [`BuildStrategy`] that builds a non-authenticated Http
/// [`RestRequest`] carrying JSON content negotiation headers.
pub mod public;

/// [`RestRequest`] build strategy for the API being interacted with.
///
/// An API that requires no authentication may just add mandatory `reqwest` headers to the
/// [`RestRequest`] before building.
pub trait BuildStrategy {
    /// Use a [`RestRequest`] and [`reqwest::RequestBuilder`] to construct a [`reqwest::Request`]
    /// that is ready for executing.
    fn build<Request>(
        &self,
        request: Request,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Request, SocketError>
    where
        Request: RestRequest;
}

/// Classification of an Http response.
///
/// Stage one inspects the [`StatusCode`], stage two inspects the body of a successful status for
/// an embedded API error. Exactly one variant describes any response.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpOutcome<Response, ApiError> {
    /// Successful status code & a body that deserialised into the expected `Response`.
    Success(Response),

    /// Non-success status code. Contains the structured API error if the body could be parsed.
    Transport {
        status: StatusCode,
        error: Option<ApiError>,
    },

    /// Successful status code, but the body carries a structured API error.
    Logical { status: StatusCode, error: ApiError },
}

/// Utilised by a [`RestClient`](rest::client::RestClient) to classify & deserialise
/// [`RestRequest::Response`]s, and upon failure parse API errors returned from the server.
pub trait HttpParser {
    type ApiError: DeserializeOwned;
    type OutputError: From<SocketError>;

    /// Classify a [`StatusCode`] & bytes payload into an [`HttpOutcome`].
    ///
    /// Fails only if a successful status carries a body that is neither the expected `Response`
    /// nor [`Self::ApiError`].
    fn classify<Response>(
        &self,
        status: StatusCode,
        payload: &[u8],
    ) -> Result<HttpOutcome<Response, Self::ApiError>, SocketError>
    where
        Response: DeserializeOwned,
    {
        // Stage 1: transport outcome
        if !status.is_success() {
            return Ok(HttpOutcome::Transport {
                status,
                error: serde_json::from_slice::<Self::ApiError>(payload).ok(),
            });
        }

        // Stage 2: logical outcome, an API error embedded in a successful response
        if let Ok(error) = serde_json::from_slice::<Self::ApiError>(payload) {
            return Ok(HttpOutcome::Logical { status, error });
        }

        match serde_json::from_slice::<Response>(payload) {
            Ok(response) => Ok(HttpOutcome::Success(response)),
            Err(parse_ok_error) => {
                error!(
                    status_code = ?status,
                    ?parse_ok_error,
                    response_body = %String::from_utf8_lossy(payload),
                    "error deserializing HTTP response"
                );

                Err(SocketError::DeserialiseBinary {
                    error: parse_ok_error,
                    payload: payload.to_vec(),
                })
            }
        }
    }

    /// Attempt to parse a [`StatusCode`] & bytes payload into a deserialisable `Response`.
    fn parse<Response>(
        &self,
        status: StatusCode,
        payload: &[u8],
    ) -> Result<Response, Self::OutputError>
    where
        Response: DeserializeOwned,
    {
        match self.classify::<Response>(status, payload)? {
            HttpOutcome::Success(response) => Ok(response),
            HttpOutcome::Transport { status, error } => {
                Err(self.parse_transport_error(status, error))
            }
            HttpOutcome::Logical { status, error } => Err(self.parse_api_error(status, error)),
        }
    }

    /// Map a non-success [`StatusCode`], and the API error it may carry, into
    /// [`Self::OutputError`].
    fn parse_transport_error(
        &self,
        status: StatusCode,
        error: Option<Self::ApiError>,
    ) -> Self::OutputError;

    /// Map an API error embedded in a successful response into [`Self::OutputError`].
    fn parse_api_error(&self, status: StatusCode, error: Self::ApiError) -> Self::OutputError;
}
