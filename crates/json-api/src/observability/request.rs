//! Request-level logging and request IDs.

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps every request in a span, echoes a request id and flags slow or failed requests.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_request_threshold_ms: u64) -> Self {
        Self {
            slow_request_threshold: Duration::from_millis(slow_request_threshold_ms),
        }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id = req
            .header::<String>(REQUEST_ID_HEADER)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        match HeaderValue::from_str(&request_id) {
            Ok(value) => {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(source) => {
                warn!(%request_id, "could not encode request id for response header: {source}");
            }
        }

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
        );

        ctrl.call_next(req, depot, res).instrument(span.clone()).await;

        let _enter = span.enter();

        let status = res.status_code.unwrap_or(StatusCode::OK);
        let elapsed = started.elapsed();
        let duration_ms = elapsed.as_millis();

        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status.as_u16(), %method, %path, "server error response");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), %method, %path, "client error response");
        }

        if elapsed > self.slow_request_threshold {
            warn!(%method, %path, duration_ms, "slow request detected");
        }
    }
}
