//! Handler module - request handling capabilities.
//!
//! Provides:
//! - [`Handler`] - the capability that does the work for one procedure
//! - [`HandlerFn`] - adapter turning a plain async function into a handler
//! - [`Registry`] - maps procedure names to handlers
//! - [`RequestContext`] - cancellable per-request context
//!
//! # Example
//!
//! ```ignore
//! use procroute::{Registry, RequestContext};
//!
//! let mut registry = Registry::new();
//!
//! registry.register_fn("echo", |_ctx, body| async move { Ok(body) });
//! ```

mod context;
mod registry;

pub use context::RequestContext;
pub use registry::{BoxFuture, Handler, HandlerFn, HandlerResult, Registry};
