use crate::{
    error::SimulateError,
    model::{
        request::SimulationRequest,
        result::{ServiceStatus, SimulationApiError, SimulationResult},
    },
};
use derive_more::Constructor;
use reqwest::{Method, StatusCode};
use std::borrow::Cow;
use tradesim_integration::protocol::http::{
    HttpParser, public::PublicJsonHeaders, rest::RestRequest, rest::client::RestClient,
};

/// [`RestClient`] configured for the simulation service.
pub type SimulatorClient = RestClient<'static, PublicJsonHeaders, SimulatorParser>;

/// `GET /simulate` with the [`SimulationRequest`] serialised as query parameters.
#[derive(Debug, Copy, Clone, Constructor)]
pub struct SimulateRequest(pub SimulationRequest);

impl RestRequest for SimulateRequest {
    type Response = SimulationResult;
    type QueryParams = SimulationRequest;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        "/simulate".into()
    }

    fn method() -> Method {
        Method::GET
    }

    fn query_params(&self) -> Option<&Self::QueryParams> {
        Some(&self.0)
    }
}

/// `GET /` returning the service banner.
#[derive(Debug, Copy, Clone, Default)]
pub struct HealthRequest;

impl RestRequest for HealthRequest {
    type Response = ServiceStatus;
    type QueryParams = ();
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        "/".into()
    }

    fn method() -> Method {
        Method::GET
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct SimulatorParser;

impl HttpParser for SimulatorParser {
    type ApiError = SimulationApiError;
    type OutputError = SimulateError;

    fn parse_transport_error(
        &self,
        status: StatusCode,
        error: Option<Self::ApiError>,
    ) -> Self::OutputError {
        let message = match error {
            Some(SimulationApiError { error }) => error,
            None => format!("HTTP error! status: {}", status.as_u16()),
        };

        SimulateError::HttpStatus { status, message }
    }

    fn parse_api_error(&self, _: StatusCode, error: Self::ApiError) -> Self::OutputError {
        SimulateError::Api(error.error)
    }
}
