//! Task-local trace id for the request being handled.
//!
//! `RequestTrace` scopes the id around the downstream service call, so any
//! code running inside a request (error rendering, extractors) can read it
//! without threading it through arguments.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Placeholder used outside of any request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Trace id of the current request, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
