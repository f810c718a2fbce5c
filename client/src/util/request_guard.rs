//! Liveness flag for async work started by a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fire REST calls from `spawn_local`. When the user navigates away
//! before a call settles, the page's signals are gone; the guard lets the
//! task notice and drop its result instead of writing into disposed state.

#[cfg(test)]
#[path = "request_guard_test.rs"]
mod request_guard_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct RequestGuard {
    alive: Arc<AtomicBool>,
}

impl Default for RequestGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Guard cancelled when the current reactive owner is cleaned up.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_teardown = guard.clone();
        on_cleanup(move || on_teardown.cancel());
        guard
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Await `task`; `None` when the guard was cancelled meanwhile.
    pub async fn settle<F: Future>(&self, task: F) -> Option<F::Output> {
        let output = task.await;
        self.is_alive().then_some(output)
    }

    /// Run `task` on the browser event loop and hand its output to `apply`
    /// unless the page was torn down first. No-op during SSR.
    pub fn spawn<F, A>(&self, task: F, apply: A)
    where
        F: Future + 'static,
        A: FnOnce(F::Output) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let guard = self.clone();
            leptos::task::spawn_local(async move {
                if let Some(output) = guard.settle(task).await {
                    apply(output);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task, apply);
        }
    }
}
