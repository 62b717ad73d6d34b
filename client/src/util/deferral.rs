//! Cancellable timed deferrals for simulated asynchronous actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Connecting a service and generating a brief both stand in for real work
//! with a fixed delay. Each view owns one `DeferralScope`; every timer it
//! schedules shares the scope's `CancelToken`, and the scope is cancelled from
//! `on_cleanup` so a timer that fires after teardown never touches state.
//!
//! TRADE-OFFS
//! ==========
//! Timers only run in the browser. SSR and native tests schedule nothing, so
//! server renders stay deterministic; `run_deferred` carries the actual logic
//! and is driven directly by tests with a controllable sleep future.

#[cfg(test)]
#[path = "deferral_test.rs"]
mod deferral_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Simulated latency of connecting an integration.
pub const CONNECT_DELAY: Duration = Duration::from_millis(2000);

/// Simulated latency of generating a brief.
pub const GENERATE_DELAY: Duration = Duration::from_millis(3000);

/// Shared cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Await `sleep`, then run `f` unless `token` was cancelled meanwhile.
///
/// Returns whether `f` ran.
pub async fn run_deferred<S, F>(sleep: S, token: CancelToken, f: F) -> bool
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    sleep.await;
    if token.is_cancelled() {
        log::debug!("deferral: owner torn down, dropping completion");
        return false;
    }
    f();
    true
}

/// Timers bound to a single view's lifetime.
#[derive(Clone, Debug, Default)]
pub struct DeferralScope {
    token: CancelToken,
}

impl DeferralScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope that is cancelled when the current reactive owner is
    /// cleaned up. Call from inside a component body.
    pub fn bound_to_owner() -> Self {
        let scope = Self::new();
        let token = scope.token();
        leptos::prelude::on_cleanup(move || token.cancel());
        scope
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel_all(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run `f` once `delay` has elapsed, unless the scope is cancelled first.
    pub fn schedule<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + 'static,
    {
        if self.is_cancelled() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let token = self.token();
            leptos::task::spawn_local(async move {
                run_deferred(gloo_timers::future::sleep(delay), token, f).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, f);
        }
    }
}
