//! Request tracing and timing middleware.
//!
//! Every request runs with a [`TraceId`] in task-local scope. The identifier
//! is taken from an inbound `trace-id` header when it holds a UUID and minted
//! otherwise, then echoed on the response. One log line per request records
//! the method, path, status and elapsed time.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware factory attaching a request-scoped [`TraceId`].
///
/// Handlers read the identifier via [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_ingest::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::from_header_or_generate(
            req.headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
        );
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();

        let fut = TraceId::sync_scope(trace_id, || self.service.call(req));
        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = match fut.await {
                Ok(res) => res,
                Err(err) => {
                    warn!(%method, %path, %trace_id, elapsed = ?started.elapsed(), error = %err, "request failed");
                    return Err(err);
                }
            };
            match HeaderValue::from_str(&trace_id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(error) => {
                    error!(%error, %trace_id, "failed to encode trace identifier header");
                }
            }
            info!(
                %method,
                %path,
                status = res.status().as_u16(),
                %trace_id,
                elapsed = ?started.elapsed(),
                "request processed"
            );
            Ok(res)
        }))
    }
}
