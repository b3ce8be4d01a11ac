//! Asynchronous conversion of fallible computations

use std::future::Future;

use log::debug;

use crate::value::{type_name, Optional};

/// Await a fallible computation, reporting its error to `handle_error`
///
/// The error is passed to `handle_error` and the result becomes `None`.
/// No cancellation policy is imposed: dropping the returned future drops
/// `attempt` without calling the handler.
pub async fn try_async<T, E, F>(
    attempt: F,
    handle_error: impl FnOnce(E),
) -> Optional<T>
where
    F: Future<Output = Result<T, E>>,
{
    match attempt.await {
        Ok(x) => Optional::Some(x),
        Err(err) => {
            debug!("async attempt for {} failed", type_name::<T>());
            handle_error(err);
            Optional::None
        }
    }
}
