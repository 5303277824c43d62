use crate::{
    config::SimulatorConfig,
    error::{SimulateError, SubmitRejected},
    http::{HealthRequest, SimulateRequest, SimulatorClient, SimulatorParser},
    model::{request::SimulationRequest, result::ServiceStatus},
    state::RequestState,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use tradesim_integration::{error::SocketError, protocol::http::public::PublicJsonHeaders};

/// Message held by [`RequestState::Failed`] if a [`Simulator::simulate`] future is dropped before
/// the service replied.
pub const CANCELLED_MESSAGE: &str = "Simulation cancelled before the service replied";

/// Orchestrates the simulation request lifecycle.
///
/// Owns the single [`RequestState`] and publishes every transition to subscribers. At most one
/// simulation is in flight at a time: a submission while [`RequestState::Loading`] is rejected
/// without issuing a request.
#[derive(Debug)]
pub struct Simulator {
    client: SimulatorClient,
    state_tx: watch::Sender<RequestState>,
}

impl Simulator {
    /// Construct a new [`Simulator`] targeting the Http API of the provided [`SimulatorConfig`].
    pub fn new(config: &SimulatorConfig) -> Result<Self, SocketError> {
        config.api_base_url().map(Self::with_base_url)
    }

    /// Construct a new [`Simulator`] targeting the provided base Url.
    pub fn with_base_url<S>(base_url: S) -> Self
    where
        S: Into<String>,
    {
        let base_url: String = base_url.into();
        let (state_tx, _) = watch::channel(RequestState::Idle);

        Self {
            client: SimulatorClient::new(base_url, PublicJsonHeaders, SimulatorParser),
            state_tx,
        }
    }

    /// Base Url of the simulation service.
    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }

    /// Subscribe to [`RequestState`] transitions.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current [`RequestState`].
    pub fn state(&self) -> RequestState {
        self.state_tx.borrow().clone()
    }

    /// Determines if a new simulation may be submitted, ie/ the state is not `Loading`.
    pub fn can_submit(&self) -> bool {
        self.state_tx.borrow().can_submit()
    }

    /// Submit a [`SimulationRequest`] and drive the state machine to a terminal state.
    ///
    /// The transition to `Loading` happens before the request is sent. The returned state is the
    /// terminal state that replaced `Loading` (also published to subscribers). Every failure is
    /// converged into [`RequestState::Failed`], the only error is [`SubmitRejected`] when a
    /// simulation is already in flight.
    pub async fn simulate(
        &self,
        request: SimulationRequest,
    ) -> Result<RequestState, SubmitRejected> {
        let guard = self.begin()?;

        let next = match self.client.execute(SimulateRequest(request)).await {
            Ok((result, latency)) => {
                debug!(
                    duration_ms = ?latency.field("duration"),
                    ?latency,
                    processing_time_ms = result.processing_time_ms,
                    "simulation succeeded"
                );
                RequestState::Success(result)
            }
            Err(error) => {
                let message = error.message();
                warn!(%message, ?error, "simulation failed");
                RequestState::Failed(message)
            }
        };

        guard.complete(next.clone());
        Ok(next)
    }

    /// Query the service root endpoint.
    ///
    /// Does not touch the [`RequestState`].
    pub async fn health(&self) -> Result<ServiceStatus, SimulateError> {
        let (status, _) = self.client.execute(HealthRequest).await?;
        info!(base_url = %self.base_url(), message = %status.message, "simulation service reachable");
        Ok(status)
    }

    /// Atomically transition to `Loading` unless a simulation is already in flight.
    fn begin(&self) -> Result<LoadingGuard<'_>, SubmitRejected> {
        let mut previous = "loading";
        let accepted = self.state_tx.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            previous = state.name();
            *state = RequestState::Loading;
            true
        });

        if accepted {
            debug!(from = previous, to = "loading", "simulation state transition");
            Ok(LoadingGuard {
                state_tx: &self.state_tx,
                completed: false,
            })
        } else {
            warn!("simulation already in flight, rejecting submission");
            Err(SubmitRejected)
        }
    }
}

/// Ends the `Loading` state. If dropped without [`LoadingGuard::complete`] (eg/ the
/// `simulate` future was cancelled by an external timeout), the state becomes `Failed` so the
/// next submission is not blocked forever.
struct LoadingGuard<'a> {
    state_tx: &'a watch::Sender<RequestState>,
    completed: bool,
}

impl LoadingGuard<'_> {
    fn complete(mut self, next: RequestState) {
        debug!(from = "loading", to = next.name(), "simulation state transition");
        self.state_tx.send_replace(next);
        self.completed = true;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            warn!("simulation dropped while in flight");
            self.state_tx
                .send_replace(RequestState::Failed(CANCELLED_MESSAGE.to_string()));
        }
    }
}
