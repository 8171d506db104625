// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower layer that paces calls with a fixed pause after each one.
//!
//! The pause is measured from the moment the previous call *finished*, not
//! from when it started. Calls through one layer and every service it produced
//! are serialized.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use tokio::{sync::Mutex, time::Instant};
use tower::Layer;

/// A Tower layer that enforces a minimum pause between consecutive calls.
///
/// # Example
///
/// ```rust
/// use semioledger::transport::MinDelayLayer;
/// use std::time::Duration;
///
/// // At least 250ms between the end of one call and the start of the next
/// let layer = MinDelayLayer::new(Duration::from_millis(250));
/// assert_eq!(layer.delay(), Duration::from_millis(250));
/// ```
#[derive(Clone, Debug)]
pub struct MinDelayLayer {
    delay: Duration,
    last_completed: Arc<Mutex<Option<Instant>>>,
}

impl MinDelayLayer {
    /// Creates a new layer with the given pause.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_completed: Arc::new(Mutex::new(None)),
        }
    }

    /// The configured pause.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<S> Layer<S> for MinDelayLayer {
    type Service = MinDelayService<S>;

    fn layer(&self, service: S) -> Self::Service {
        MinDelayService {
            service,
            delay: self.delay,
            last_completed: self.last_completed.clone(),
        }
    }
}

/// A Tower service that waits out the configured pause before each call.
#[derive(Clone, Debug)]
pub struct MinDelayService<S> {
    service: S,
    delay: Duration,
    last_completed: Arc<Mutex<Option<Instant>>>,
}

impl<S, Request> tower::Service<Request> for MinDelayService<S>
where
    S: tower::Service<Request> + Clone + Send + 'static,
    S::Future: Send,
    Request: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let last_completed = self.last_completed.clone();
        let delay = self.delay;
        let mut service = self.service.clone();

        Box::pin(async move {
            // Held across the call so concurrent callers queue up
            let mut last = last_completed.lock().await;

            if let Some(completed) = *last {
                tokio::time::sleep_until(completed + delay).await;
            }

            let result = service.call(request).await;
            *last = Some(Instant::now());
            result
        })
    }
}
