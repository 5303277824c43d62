use super::BuildStrategy;
use crate::error::SocketError;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};

/// [`RestRequest`](super::rest::RestRequest) [`BuildStrategy`] that builds a non-authenticated
/// Http request negotiating JSON content.
#[derive(Debug, Copy, Clone, Default)]
pub struct PublicJsonHeaders;

impl BuildStrategy for PublicJsonHeaders {
    fn build<Request>(
        &self,
        _: Request,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Request, SocketError> {
        builder
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .build()
            .map_err(SocketError::from)
    }
}
