use std::cell::RefCell;
use std::rc::Rc;

use leptos::{RwSignal, SignalSet, create_rw_signal, on_cleanup};

use crate::infrastructure::services::BrowserIntervalScheduler;

/// Refresh cadence used when the caller does not pick one
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 5_000;

/// Handle to one scheduled repeating timer. Dropping it cancels the timer,
/// so a guard can never outlive its owner.
pub struct IntervalGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl IntervalGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Platform abstraction for repeating timers. The browser implementation
/// lives in the infrastructure layer; tests drive the state machine with a
/// hand-cranked scheduler.
pub trait IntervalScheduler {
    fn repeat(&self, interval_ms: u32, callback: Rc<dyn Fn()>) -> IntervalGuard;
}

/// Repeating-refresh state machine: Idle until `start`, Running until
/// `stop`. At most one underlying timer exists per instance.
pub struct AutoRefresh<S: IntervalScheduler> {
    scheduler: S,
    interval_ms: u32,
    callback: Rc<dyn Fn()>,
    running: Option<IntervalGuard>,
}

impl<S: IntervalScheduler> AutoRefresh<S> {
    pub fn new(scheduler: S, callback: impl Fn() + 'static) -> Self {
        Self::with_interval(scheduler, callback, DEFAULT_REFRESH_INTERVAL_MS)
    }

    pub fn with_interval(scheduler: S, callback: impl Fn() + 'static, interval_ms: u32) -> Self {
        Self { scheduler, interval_ms, callback: Rc::new(callback), running: None }
    }

    /// Begin ticking. Starting an already-running refresh is a no-op, so
    /// two starts never double the tick rate.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }
        self.running = Some(self.scheduler.repeat(self.interval_ms, Rc::clone(&self.callback)));
    }

    /// Cancel further ticks. Stopping while idle is a no-op.
    pub fn stop(&mut self) {
        self.running = None;
    }

    /// Stop then start: elapsed time always restarts from zero.
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    pub fn is_active(&self) -> bool {
        self.running.is_some()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

/// Leptos binding around [`AutoRefresh`]: exposes the state machine through
/// clonable closures plus an `is_active` signal, and guarantees the timer
/// dies with the owning scope.
#[derive(Clone)]
pub struct UseAutoRefresh {
    inner: Rc<RefCell<AutoRefresh<BrowserIntervalScheduler>>>,
    is_active: RwSignal<bool>,
}

impl UseAutoRefresh {
    pub fn start(&self) {
        let mut refresh = self.inner.borrow_mut();
        refresh.start();
        self.is_active.set(refresh.is_active());
    }

    pub fn stop(&self) {
        let mut refresh = self.inner.borrow_mut();
        refresh.stop();
        self.is_active.set(refresh.is_active());
    }

    pub fn restart(&self) {
        let mut refresh = self.inner.borrow_mut();
        refresh.restart();
        self.is_active.set(refresh.is_active());
    }

    pub fn is_active(&self) -> RwSignal<bool> {
        self.is_active
    }
}

/// Create an auto-refresh bound to the current reactive scope; `stop` runs
/// unconditionally on scope teardown so no timer survives the owner.
pub fn use_auto_refresh(callback: impl Fn() + 'static, interval_ms: u32) -> UseAutoRefresh {
    let inner = Rc::new(RefCell::new(AutoRefresh::with_interval(
        BrowserIntervalScheduler,
        callback,
        interval_ms,
    )));
    let handle = UseAutoRefresh { inner, is_active: create_rw_signal(false) };

    // Teardown only cancels the timer; the signal may already be disposed.
    on_cleanup({
        let inner = Rc::clone(&handle.inner);
        move || inner.borrow_mut().stop()
    });

    handle
}
