use std::{future::Future, time::Duration};

use parking_lot::Mutex;
use tokio::{task::JoinHandle, time::sleep};

/// Delays work until `delay` has passed without another `schedule` call.
///
/// Only the waiting phase is cancellable: once the timer fires, the work is
/// spawned on its own and runs to completion. Dropping the debouncer cancels
/// whatever timer is still pending.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Replaces any pending timer with a new one running `work` when it fires.
    pub fn schedule<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            sleep(delay).await;
            tokio::spawn(work);
        });

        if let Some(previous) = self.pending.lock().replace(timer) {
            previous.abort();
        }
    }

    /// Cancels the pending timer, if any. Returns whether one was still waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.get_mut().take() {
            timer.abort();
        }
    }
}
