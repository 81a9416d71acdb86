//! # procroute
//!
//! Procedure router for hosts that multiplex many logical operations
//! behind one physical invoke endpoint (e.g. a cloud function's
//! invocation callback).
//!
//! The host decodes the invocation event into a [`Request`] naming a
//! procedure and carrying an opaque body, and passes it to
//! [`Router::handle`]. The router finds the registered handler, invokes
//! it under a cancellable [`RequestContext`], and normalizes the outcome
//! into a [`Response`]. Handler errors never surface as call failures;
//! they are encoded into the response's `error` field instead. The only
//! failure `handle` itself reports is an unrecognized procedure name.
//!
//! ## Example
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
//!     host::serve(move |ctx, event: Vec<u8>| {
//!         let router = &router;
//!         async move {
//!             let request: Request = serde_json::from_slice(&event)?;
//!             let response = router.handle(ctx, request).await?;
//!             Ok(serde_json::to_vec(&response)?)
//!         }
//!     })
//!     .await
//! }
//! ```

pub mod envelope;
pub mod error;
pub mod handler;
pub mod router;

pub use envelope::{Payload, Request, Response};
pub use error::{BoxError, RouterError};
pub use handler::{BoxFuture, Handler, HandlerFn, HandlerResult, Registry, RequestContext};
pub use router::{ErrorEncoder, Router, RouterBuilder};
