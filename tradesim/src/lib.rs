#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]

//! # Tradesim
//! Client for a remote trade simulation service.
//!
//! Collects order parameters, issues a single `GET /simulate` request, and renders the returned
//! fill price, slippage, fees, market impact and maker/taker probabilities. The simulation engine
//! itself is opaque: every number shown is taken verbatim from the service.
//!
//! ## Overview
//! * **Model**: [`SimulationRequest`](model::request::SimulationRequest) sent as flat query
//!   parameters, [`SimulationResult`](model::result::SimulationResult) deserialised from the
//!   response.
//! * **Simulator**: owns the [`RequestState`](state::RequestState) machine
//!   (`Idle -> Loading -> {Success, Failed}`), gates submissions while `Loading`, and converges
//!   every failure into a single human-readable message.
//! * **Render**: pure formatting of numbers & percentages, sign based presentation classes, and
//!   a fixed order [`ResultView`](render::view::ResultView).
//!
//! ## Example
//! ```rust,no_run
//! use tradesim::{
//!     config::SimulatorConfig,
//!     model::request::SimulationRequest,
//!     render::view::{ResultView, TablePrinter},
//!     simulator::Simulator,
//!     state::RequestState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let simulator = Simulator::new(&SimulatorConfig::from_env())?;
//!
//!     match simulator.simulate(SimulationRequest::default()).await? {
//!         RequestState::Success(result) => ResultView::from(&result).print(),
//!         RequestState::Failed(message) => eprintln!("{message}"),
//!         _ => unreachable!("simulate always returns a terminal state"),
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Service endpoint configuration.
pub mod config;

/// All [`Error`](std::error::Error)s generated in Tradesim.
pub mod error;

/// [`RestRequest`](tradesim_integration::protocol::http::rest::RestRequest)s and the
/// [`HttpParser`](tradesim_integration::protocol::http::HttpParser) for the simulation service.
pub mod http;

/// Logging initialisation utilities.
pub mod logging;

/// Simulation request & result data model.
pub mod model;

/// Pure presentation of [`SimulationResult`](model::result::SimulationResult)s.
pub mod render;

/// [`Simulator`](simulator::Simulator) request orchestrator.
pub mod simulator;

/// [`RequestState`](state::RequestState) lifecycle.
pub mod state;
