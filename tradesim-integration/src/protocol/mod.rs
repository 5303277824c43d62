/// Http protocol abstractions: [`RestRequest`](http::rest::RestRequest),
/// [`RestClient`](http::rest::client::RestClient), [`BuildStrategy`](http::BuildStrategy) and
/// [`HttpParser`](http::HttpParser).
pub mod http;
