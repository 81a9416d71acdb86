//! Router - procedure dispatch and response normalization.
//!
//! The [`Router`] owns a [`Registry`] and an error-encoding strategy.
//! Its [`handle`](Router::handle) method does the work of looking up the
//! requested procedure, invoking its handler, and wrapping the result
//! (or the handler's error) into a [`Response`].
//!
//! # Example
//!
//! ```ignore
//! use procroute::{Request, RequestContext, Router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = Router::builder()
//!         .route_fn("echo", |_ctx, body| async move { Ok(body) })
//!         .build();
//!
//!     let request = serde_json::from_slice(&event)?;
//!     let response = router.handle(RequestContext::new(), request).await?;
//!     let encoded = serde_json::to_vec(&response)?;
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::envelope::{Payload, Request, Response};
use crate::error::{BoxError, Result, RouterError};
use crate::handler::{Handler, HandlerResult, Registry, RequestContext};

/// Pluggable strategy converting a handler error into a response payload.
///
/// Configured once at construction via
/// [`RouterBuilder::encode_errors_with`]; immutable thereafter.
pub type ErrorEncoder =
    Box<dyn Fn(&BoxError) -> std::result::Result<Payload, BoxError> + Send + Sync>;

/// Default error-encoding strategy: the error's message as a JSON string.
fn encode_message(err: &BoxError) -> std::result::Result<Payload, BoxError> {
    Ok(Payload::String(err.to_string()))
}

/// Dispatches request envelopes to registered handlers.
///
/// `handle` should be hooked up to the host's single invoke entry point.
/// It unwraps the request envelope, passes the body to the relevant
/// handler, and wraps the returned payload (or error) into a response.
///
/// Each router instance owns its registry and encoding strategy, so
/// independently configured routers can coexist in one process.
pub struct Router {
    registry: Registry,
    encode_error: ErrorEncoder,
}

impl Router {
    /// Create a router with an empty registry and the default
    /// error-encoding strategy.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            encode_error: Box::new(encode_message),
        }
    }

    /// Create a router builder.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Register a handler under a procedure name.
    ///
    /// NOTE: If multiple handlers are registered under the same
    /// procedure, only the last registered one will be called.
    pub fn route<H>(&mut self, procedure: impl Into<String>, handler: H)
    where
        H: Handler,
    {
        self.registry.register(procedure, handler);
    }

    /// Register an ordinary async function as the handler for a procedure.
    pub fn route_fn<F, Fut>(&mut self, procedure: impl Into<String>, f: F)
    where
        F: Fn(RequestContext, Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.registry.register_fn(procedure, f);
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch a request envelope to its handler.
    ///
    /// Returns `Err` only when no handler is registered under the
    /// requested procedure name - a wiring mistake on the caller's side.
    /// A failure inside the handler is not a dispatch failure: it is
    /// run through the error-encoding strategy and returned as a
    /// response whose `error` field is set. If the strategy itself
    /// fails, its failure is swallowed and the original error's message
    /// is encoded instead.
    pub async fn handle(&self, ctx: RequestContext, request: Request) -> Result<Response> {
        let handler = self
            .registry
            .lookup(&request.procedure)
            .ok_or_else(|| RouterError::UnrecognizedProcedure(request.procedure.clone()))?;

        tracing::debug!(procedure = %request.procedure, "dispatching request");

        match handler.call(ctx, request.body).await {
            Ok(body) => Ok(Response::success(body)),
            Err(err) => {
                let encoded = match (self.encode_error)(&err) {
                    Ok(payload) => payload,
                    Err(encode_err) => {
                        tracing::warn!(
                            procedure = %request.procedure,
                            error = %encode_err,
                            "error encoder failed, falling back to message text"
                        );
                        Payload::String(err.to_string())
                    }
                };
                Ok(Response::failure(encoded))
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring and creating a [`Router`].
///
/// Options are applied in call order; when the same option is given
/// twice, the later call wins.
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    /// Create a new router builder.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Register a handler under a procedure name.
    pub fn route<H>(mut self, procedure: impl Into<String>, handler: H) -> Self
    where
        H: Handler,
    {
        self.router.route(procedure, handler);
        self
    }

    /// Register an ordinary async function as the handler for a procedure.
    pub fn route_fn<F, Fut>(mut self, procedure: impl Into<String>, f: F) -> Self
    where
        F: Fn(RequestContext, Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.router.route_fn(procedure, f);
        self
    }

    /// Replace the error-encoding strategy.
    ///
    /// The strategy may stream additional content carried by the error
    /// value. If it fails, the router falls back to encoding the
    /// original error's message; the strategy's own failure is never
    /// propagated to the caller.
    pub fn encode_errors_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&BoxError) -> std::result::Result<Payload, BoxError> + Send + Sync + 'static,
    {
        self.router.encode_error = Box::new(f);
        self
    }

    /// Build the router.
    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
