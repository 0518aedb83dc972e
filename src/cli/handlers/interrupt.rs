//! Ctrl-C handling for form submits

use std::future::Future;

use log::debug;

use crate::error::{Error, Result};

/// Await `request`, calling `cancel` if Ctrl-C arrives first.
///
/// After cancelling, the request is still awaited so it can settle (a form's
/// in-flight request resolves to `Error::Cancelled` once aborted).
pub async fn interruptible<F, T, C>(request: F, cancel: C) -> Result<T>
where
    F: Future<Output = Result<T>>,
    C: FnOnce(),
{
    let interrupt = tokio::signal::ctrl_c();
    interruptible_with(request, interrupt, cancel).await
}

async fn interruptible_with<F, T, I, C>(request: F, interrupt: I, cancel: C) -> Result<T>
where
    F: Future<Output = Result<T>>,
    I: Future,
    C: FnOnce(),
{
    tokio::pin!(request);
    tokio::pin!(interrupt);

    tokio::select! {
        result = &mut request => result,
        _ = &mut interrupt => {
            debug!("Interrupted; cancelling outstanding request");
            cancel();
            request.await
        }
    }
}

/// Await `request`, dropping it with [`Error::Cancelled`] if Ctrl-C arrives first.
///
/// For work with nothing to settle, such as the screen shown after a submit.
/// Once [`interruptible`] has run, Ctrl-C no longer ends the process by
/// itself, so anything awaited afterwards goes through here.
pub async fn until_interrupted<F, T>(request: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    until_interrupted_with(request, tokio::signal::ctrl_c()).await
}

async fn until_interrupted_with<F, T, I>(request: F, interrupt: I) -> Result<T>
where
    F: Future<Output = Result<T>>,
    I: Future,
{
    tokio::select! {
        result = request => result,
        _ = interrupt => {
            debug!("Interrupted; dropping request");
            Err(Error::Cancelled)
        }
    }
}
