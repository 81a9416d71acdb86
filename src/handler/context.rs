//! Request context for handlers.
//!
//! The context is built by the host, handed to the router's entry point,
//! and passed through to the invoked handler unchanged. The router
//! imposes no timeout or cancellation policy of its own - honoring the
//! token is the handler's responsibility.
//!
//! # Example
//!
//! ```ignore
//! async fn slow_handler(ctx: RequestContext, body: Payload) -> HandlerResult {
//!     tokio::select! {
//!         _ = ctx.cancelled() => Err("cancelled".into()),
//!         result = do_work(body) => result,
//!     }
//! }
//! ```

use tokio_util::sync::CancellationToken;

/// Context passed to request handlers.
///
/// # Thread Safety
///
/// `RequestContext` is `Clone` and can be safely shared across async
/// tasks; clones observe the same cancellation token.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Cancellation token for this request.
    cancellation: CancellationToken,
}

impl RequestContext {
    /// Create a new context with a fresh, never-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context carrying the host's cancellation token.
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self { cancellation }
    }

    /// Get the cancellation token.
    #[inline]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Check whether the request has been cancelled.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Wait until the request is cancelled.
    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_not_cancelled() {
        let ctx = RequestContext::new();
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_context_carries_host_token() {
        let token = CancellationToken::new();
        let ctx = RequestContext::with_cancellation(token.clone());

        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_clones_share_token() {
        let ctx = RequestContext::new();
        let ctx2 = ctx.clone();

        ctx.cancellation().cancel();
        assert!(ctx2.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_cancel() {
        let ctx = RequestContext::new();
        ctx.cancellation().cancel();
        // Must resolve immediately once the token is cancelled.
        ctx.cancelled().await;
    }
}
