//! Handler registry for dispatching requests by procedure name.
//!
//! The registry maps procedure names to handlers. Names are matched
//! exactly; if multiple handlers are registered under the same name,
//! only the last registered one is kept.
//!
//! # Example
//!
//! ```ignore
//! use procroute::{HandlerFn, Registry};
//!
//! let mut registry = Registry::new();
//!
//! registry.register_fn("echo", |_ctx, body| async move { Ok(body) });
//!
//! assert!(registry.lookup("echo").is_some());
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use super::RequestContext;
use crate::envelope::Payload;
use crate::error::BoxError;

/// Result type for handler functions.
pub type HandlerResult = Result<Payload, BoxError>;

/// Boxed future for handler results.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for handler functions.
///
/// A handler is the capability that performs the actual work for one
/// procedure name: given a request context and an opaque payload, it
/// produces either an opaque payload or an error. Implement this trait
/// on a named type, or wrap a plain async function with [`HandlerFn`].
pub trait Handler: Send + Sync + 'static {
    /// Handle a request with the given context and opaque payload.
    fn call(&self, ctx: RequestContext, body: Payload) -> BoxFuture<'static, HandlerResult>;
}

/// Adapter that lets an ordinary async function act as a [`Handler`].
///
/// If `f` is a function with the appropriate signature, `HandlerFn::new(f)`
/// is a `Handler` that calls `f`.
pub struct HandlerFn<F> {
    f: F,
}

impl<F, Fut> HandlerFn<F>
where
    F: Fn(RequestContext, Payload) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    /// Wrap a function into a handler.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(RequestContext, Payload) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn call(&self, ctx: RequestContext, body: Payload) -> BoxFuture<'static, HandlerResult> {
        Box::pin((self.f)(ctx, body))
    }
}

/// Registry mapping procedure names to handlers.
///
/// Mutated only through explicit registration; dispatch reads it but
/// never changes it. Registration is expected to complete before
/// traffic begins.
#[derive(Default)]
pub struct Registry {
    /// Handlers by procedure name.
    routes: HashMap<String, Box<dyn Handler>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a procedure name.
    ///
    /// Any name is a legal key, including the empty string; no
    /// normalization is applied. Registering a second handler under the
    /// same name silently replaces the first.
    pub fn register<H>(&mut self, procedure: impl Into<String>, handler: H)
    where
        H: Handler,
    {
        self.routes.insert(procedure.into(), Box::new(handler));
    }

    /// Register an ordinary async function as the handler for a procedure.
    pub fn register_fn<F, Fut>(&mut self, procedure: impl Into<String>, f: F)
    where
        F: Fn(RequestContext, Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(procedure, HandlerFn::new(f));
    }

    /// Get the handler bound to a procedure name.
    pub fn lookup(&self, procedure: &str) -> Option<&dyn Handler> {
        self.routes.get(procedure).map(|h| h.as_ref())
    }

    /// Check whether a procedure name is bound.
    pub fn contains(&self, procedure: &str) -> bool {
        self.routes.contains_key(procedure)
    }

    /// Number of bound procedure names.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
