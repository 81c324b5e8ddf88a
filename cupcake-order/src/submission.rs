use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cupcake_core::{wire, Order, OrderTransport, TransportError, WireError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the presentation shows once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(msg) | Outcome::Failure(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl From<Result<Order, SubmissionError>> for Outcome {
    fn from(result: Result<Order, SubmissionError>) -> Self {
        match result {
            Ok(confirmed) => Outcome::Success(format!(
                "Your order for {} cupcakes is on its way.",
                confirmed.quantity
            )),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Failed to encode order.")]
    Encoding(#[source] WireError),

    #[error("No data in response: {0}.")]
    Transport(#[source] TransportError),

    #[error("Invalid response {raw}")]
    Parse {
        raw: String,
        #[source]
        source: WireError,
    },

    #[error("An order is already being submitted.")]
    InFlight,
}

/// Sends orders to the endpoint and turns the reply into an [`Outcome`].
///
/// Only one submission runs at a time; a second call made while one is
/// pending fails immediately without touching the network.
pub struct SubmissionService {
    transport: Arc<dyn OrderTransport>,
    in_flight: AtomicBool,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionService {
    pub fn new(transport: Arc<dyn OrderTransport>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            transport,
            in_flight: AtomicBool::new(false),
            state,
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Submit `order` and report the result as a display message.
    pub async fn submit_order(&self, order: &Order) -> Outcome {
        let outcome = Outcome::from(self.try_submit(order).await);
        if let Outcome::Failure(msg) = &outcome {
            warn!("Order submission failed: {}", msg);
        }
        outcome
    }

    /// Submit `order` and return the order echoed back by the endpoint.
    pub async fn try_submit(&self, order: &Order) -> Result<Order, SubmissionError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmissionError::InFlight);
        }

        let guard = InFlightGuard {
            in_flight: &self.in_flight,
            state: &self.state,
            settled: false,
        };
        self.state.send_replace(SubmissionState::Submitting);

        let result = self.send(order).await;
        guard.settle(if result.is_ok() {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        });

        result
    }

    /// Run the submission on the runtime so the caller is never blocked.
    pub fn spawn(self: Arc<Self>, order: Order) -> JoinHandle<Outcome> {
        tokio::spawn(async move { self.submit_order(&order).await })
    }

    async fn send(&self, order: &Order) -> Result<Order, SubmissionError> {
        let encoded = wire::serialize(order).map_err(SubmissionError::Encoding)?;
        debug!("Encoded order: {}", String::from_utf8_lossy(&encoded));

        let body = self
            .transport
            .post_json(encoded)
            .await
            .map_err(SubmissionError::Transport)?;
        debug!("Response body: {}", String::from_utf8_lossy(&body));

        match wire::deserialize(&body) {
            Ok(confirmed) => {
                info!("{}", confirmed);
                Ok(confirmed)
            }
            Err(source) => Err(SubmissionError::Parse {
                raw: String::from_utf8_lossy(&body).into_owned(),
                source,
            }),
        }
    }
}

/// Releases the in-flight flag even when the submitting future is dropped
/// before the response arrives.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    state: &'a watch::Sender<SubmissionState>,
    settled: bool,
}

impl InFlightGuard<'_> {
    fn settle(mut self, state: SubmissionState) {
        self.state.send_replace(state);
        self.settled = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Order submission abandoned before a response arrived");
            self.state.send_replace(SubmissionState::Failed);
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Returns the request body as the response, like the hosted mock endpoint.
pub struct EchoTransport;

#[async_trait]
impl OrderTransport for EchoTransport {
    async fn post_json(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        Ok(body)
    }
}

/// Always answers with the same bytes.
pub struct StaticTransport(pub Vec<u8>);

#[async_trait]
impl OrderTransport for StaticTransport {
    async fn post_json(&self, _body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        Ok(self.0.clone())
    }
}

/// Never gets a response.
pub struct FailingTransport(pub TransportError);

#[async_trait]
impl OrderTransport for FailingTransport {
    async fn post_json(&self, _body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        Err(self.0.clone())
    }
}
