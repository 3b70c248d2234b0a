use std::future::Future;
use std::pin::pin;

use futures_util::future::{Either, select};
use gloo_timers::future::TimeoutFuture;

/// Races `request` against a timer. A request that loses the race fails.
pub async fn with_timeout<T, E>(timeout_ms: u32, request: impl Future<Output = Result<T, E>>) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let request = pin!(request);
    let timer = pin!(TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => Ok(result?),
        Either::Right(_) => anyhow::bail!("timed out after {} ms", timeout_ms),
    }
}
