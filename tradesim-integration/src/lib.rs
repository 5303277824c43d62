#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity)]

//! # Tradesim-Integration
//! Low-level framework for talking Http to a remote trade simulation service.
//!
//! Utilised by the `tradesim` crate to issue simulation requests and classify the responses. It
//! knows nothing about slippage, fees or order books - only how to build a request, execute it,
//! and decide whether the reply is a success, a transport failure, or a logical failure.
//!
//! ## Core abstractions:
//! - **RestRequest** describing a resource path, method and serialisable query parameters.
//! - **RestClient** executing [`RestRequest`](protocol::http::rest::RestRequest)s against an
//!   injected base Url.
//! - **HttpParser** performing two-stage classification of a status code & body into an
//!   [`HttpOutcome`](protocol::http::HttpOutcome).

/// All [`Error`](std::error::Error)s generated in Tradesim-Integration.
pub mod error;

/// Contains the Http protocol abstractions used to execute requests & parse responses.
pub mod protocol;

/// Contains the flexible `Metric` type used for representing request latency measurements.
pub mod metric;

