//! One outstanding request per form
//!
//! A form's submit control is "disabled" while [`InFlight`] holds a request:
//! a second submit fails with [`Error::Busy`] instead of reaching the API.
//! Cancelling (or dropping the form) aborts the outstanding request so its
//! completion never lands on a form nobody is looking at.

use std::future::Future;
use std::sync::Mutex;

use futures::future::{AbortHandle, Abortable};

use crate::error::{Error, Result};

/// Slot for the single request a form may have outstanding
#[derive(Default)]
pub struct InFlight {
    current: Mutex<Option<AbortHandle>>,
}

impl InFlight {
    /// Run `request` unless another one is already outstanding.
    pub async fn run<F, T>(&self, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut current = self.lock();
            if current.is_some() {
                return Err(Error::Busy);
            }
            *current = Some(handle);
        }

        let _release = Release(self);
        match Abortable::new(request, registration).await {
            Ok(result) => result,
            Err(_aborted) => Err(Error::Cancelled),
        }
    }

    /// Whether a request is outstanding
    pub fn is_busy(&self) -> bool {
        self.lock().is_some()
    }

    /// Abort the outstanding request, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().as_ref() {
            log::debug!("Aborting in-flight request");
            handle.abort();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Frees the slot when the request finishes, fails or is dropped.
struct Release<'a>(&'a InFlight);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        *self.0.lock() = None;
    }
}

/// Submission state shared by every form: the request slot plus the inline error
#[derive(Default)]
pub struct FormStatus {
    in_flight: InFlight,
    error: Mutex<Option<String>>,
}

impl FormStatus {
    /// Inline error from the last failed submit
    pub fn error(&self) -> Option<String> {
        self.error.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        *self.error.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Run the form's request through its [`InFlight`] slot
    pub async fn run<F, T>(&self, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.in_flight.run(request).await
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_busy()
    }

    pub fn cancel(&self) {
        self.in_flight.cancel();
    }
}
