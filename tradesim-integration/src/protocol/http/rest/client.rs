use crate::{
    error::SocketError,
    metric::{Field, Metric, Tag},
    protocol::http::{BuildStrategy, HttpParser, rest::RestRequest},
};
use bytes::Bytes;
use chrono::Utc;
use std::borrow::Cow;
use tracing::debug;
use url::Url;

/// Configurable REST client capable of executing [`RestRequest`]s. Each API will require a
/// specific combination of [`BuildStrategy`] and [`HttpParser`].
#[derive(Debug)]
pub struct RestClient<'a, Strategy, Parser> {
    /// HTTP [`reqwest::Client`] for executing [`reqwest::Request`]s.
    pub http_client: reqwest::Client,

    /// Base Url of the API being interacted with.
    pub base_url: Cow<'a, str>,

    /// [`RestRequest`] build strategy for the API being interacted with that implements
    /// [`BuildStrategy`].
    pub strategy: Strategy,

    /// [`HttpParser`] that classifies & deserialises [`RestRequest::Response`]s, and upon
    /// failure parses API errors returned from the server.
    pub parser: Parser,
}

impl<Strategy, Parser> RestClient<'_, Strategy, Parser>
where
    Strategy: BuildStrategy,
    Parser: HttpParser,
{
    /// Execute the provided [`RestRequest`].
    pub async fn execute<Request>(
        &self,
        request: Request,
    ) -> Result<(Request::Response, Metric), Parser::OutputError>
    where
        Request: RestRequest,
    {
        // Use provided Request to construct a reqwest::Request
        let request = self.build(request)?;

        // Measure request execution
        let (status, payload, latency) = self.measured_execution::<Request>(request).await?;

        debug!(
            status_code = %status,
            response_body = %String::from_utf8_lossy(&payload),
            "received HTTP response"
        );

        // Attempt to parse API Success or Error response
        self.parser
            .parse::<Request::Response>(status, &payload)
            .map(|response| (response, latency))
    }

    /// Use the provided [`RestRequest`] to construct a Http [`reqwest::Request`].
    pub fn build<Request>(&self, request: Request) -> Result<reqwest::Request, SocketError>
    where
        Request: RestRequest,
    {
        let url = self.url(&request)?;
        debug!(method = %Request::method(), %url, "constructed HTTP request");

        // Construct RequestBuilder with method & url
        let mut builder = self.http_client.request(Request::method(), url);

        // Add optional timeout
        if let Some(timeout) = Request::timeout() {
            builder = builder.timeout(timeout);
        }

        // Add optional Body
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        // Use RequestBuilder (public strategy) to build reqwest::Request
        self.strategy.build(request, builder)
    }

    /// Construct the full [`Url`] of the provided [`RestRequest`], including any url encoded
    /// query parameters.
    pub fn url<Request>(&self, request: &Request) -> Result<Url, SocketError>
    where
        Request: RestRequest,
    {
        let mut url = format!("{}{}", self.base_url, request.path());

        if let Some(query_params) = request.query_params() {
            let query = serde_urlencoded::to_string(query_params)?;
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }

        Url::parse(&url).map_err(SocketError::from)
    }

    /// Execute the built [`reqwest::Request`] using the [`reqwest::Client`].
    ///
    /// Measures and returns the Http request round trip duration.
    pub async fn measured_execution<Request>(
        &self,
        request: reqwest::Request,
    ) -> Result<(reqwest::StatusCode, Bytes, Metric), SocketError>
    where
        Request: RestRequest,
    {
        // Construct Http request duration Metric
        let mut latency = Metric {
            name: "http_request_duration",
            time: Utc::now().timestamp_millis() as u64,
            tags: vec![
                Tag::new("http_method", Request::method().as_str()),
                Tag::new("base_url", self.base_url.as_ref()),
                Tag::new("path", request.url().path()),
            ],
            fields: Vec::with_capacity(1),
        };

        // Measure the HTTP request round trip duration
        let start = std::time::Instant::now();
        let response = self.http_client.execute(request).await?;
        let duration = start.elapsed().as_millis() as u64;

        // Update Metric with response status and request duration
        latency
            .tags
            .push(Tag::new("status_code", response.status().as_str()));
        latency.fields.push(Field::new("duration", duration));

        // Extract Status Code & reqwest::Response Bytes
        let status_code = response.status();
        let payload = response.bytes().await?;

        Ok((status_code, payload, latency))
    }
}

impl<'a, Strategy, Parser> RestClient<'a, Strategy, Parser> {
    /// Construct a new [`Self`] using the provided configuration.
    ///
    /// A trailing `/` on the base Url is trimmed so request paths can always start with `/`.
    pub fn new<BaseUrl: Into<Cow<'a, str>>>(
        base_url: BaseUrl,
        strategy: Strategy,
        parser: Parser,
    ) -> Self {
        let base_url = match base_url.into() {
            Cow::Borrowed(base_url) => Cow::Borrowed(base_url.trim_end_matches('/')),
            Cow::Owned(base_url) => Cow::Owned(base_url.trim_end_matches('/').to_owned()),
        };

        Self {
            http_client: reqwest::Client::new(),
            base_url,
            strategy,
            parser,
        }
    }
}
