// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collapse bursts of calls into one call after a quiet interval.
//!
//! Every [`Debouncer::call`] replaces the pending call, so only the last
//! argument of a burst reaches the callback. Once the interval has elapsed
//! the callback is spawned as its own task: a later `call` or `cancel` stops
//! a timer, never a callback that is already running.
//!
//! Must be used from inside a Tokio runtime.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

type BoxedCallback<T> =
    Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    callback: BoxedCallback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            delay,
            callback: Arc::new(move |arg: T| -> Pin<Box<dyn Future<Output = ()> + Send>> {
                Box::pin(callback(arg))
            }),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `callback(arg)` after the quiet interval, discarding any call
    /// still waiting.
    pub fn call(&self, arg: T) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            sleep(delay).await;
            tokio::spawn(callback(arg));
        });

        if let Some(previous) = self.pending.lock().replace(timer) {
            previous.abort();
        }
    }

    /// Discard the waiting call, if any. Has no other effect.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }

    /// Whether a call is still waiting for its interval to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.get_mut().take() {
            pending.abort();
        }
    }
}
