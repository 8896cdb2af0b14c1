//! Platform sleep and request timeouts.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

use crate::error::ApiError;

/// Suspend the current task. Browser builds ride on `setTimeout`.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Race `future` against a timer. `None` waits forever.
pub(crate) async fn with_timeout<T>(
    limit: Option<Duration>,
    future: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    let Some(limit) = limit else {
        return future.await;
    };
    let future = pin!(future);
    let timer = pin!(sleep(limit));
    match select(future, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fast_future_wins() {
        let result = with_timeout(Some(Duration::from_secs(5)), async { Ok::<_, ApiError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_slow_future_times_out() {
        let limit = Duration::from_millis(10);
        let result = with_timeout(Some(limit), async {
            sleep(Duration::from_secs(5)).await;
            Ok::<_, ApiError>(())
        })
        .await;
        assert_eq!(result, Err(ApiError::Timeout(limit)));
    }

    #[tokio::test]
    async fn test_no_limit_waits() {
        let result = with_timeout(None, async { Ok::<_, ApiError>("done") }).await;
        assert_eq!(result, Ok("done"));
    }
}
