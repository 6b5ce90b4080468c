//! Best-effort task path for analytics calls
//!
//! View tracking, watch-time recording and share counting must never disrupt
//! the viewing experience. This is the single sanctioned place where an API
//! failure is swallowed: the error is logged and goes nowhere else. Primary
//! flows must not use this wrapper.

use std::future::Future;

use common::ApiResult;
use tokio::task::JoinHandle;
use tracing::warn;

/// Spawn `task` in the background, logging a failure instead of surfacing it
///
/// Returns the join handle so tests (and shutdown paths) can await
/// completion; callers in UI flows just drop it.
pub fn best_effort<T, F>(what: &'static str, task: F) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = ApiResult<T>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = task.await {
            warn!("Best-effort {} failed: {}", what, err);
        }
    })
}

#[cfg(test)]
mod tests {
    use common::ApiError;

    use super::*;

    #[tokio::test]
    async fn failures_do_not_propagate() {
        let handle = best_effort("view tracking", async {
            Err::<(), _>(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
                body: None,
            })
        });
        handle.await.expect("task must not panic");
    }

    #[tokio::test]
    async fn successes_run_to_completion() {
        let handle = best_effort("watch time", async { Ok::<_, ApiError>(42) });
        handle.await.expect("task must not panic");
    }
}
