use std::cell::{Cell, RefCell};
use std::rc::Rc;

use order_terminal_wasm::application::{
    AutoRefresh, DEFAULT_REFRESH_INTERVAL_MS, IntervalGuard, IntervalScheduler,
};

struct FakeTimer {
    id: usize,
    interval_ms: u32,
    elapsed_ms: u32,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct SchedulerState {
    timers: Vec<FakeTimer>,
    next_id: usize,
}

/// Hand-cranked scheduler: `advance` plays the role of the browser clock.
#[derive(Clone, Default)]
struct FakeScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl FakeScheduler {
    fn advance(&self, ms: u32) {
        let mut due = Vec::new();
        {
            let mut state = self.state.borrow_mut();
            for timer in &mut state.timers {
                timer.elapsed_ms += ms;
                let fires = timer.elapsed_ms / timer.interval_ms;
                timer.elapsed_ms %= timer.interval_ms;
                for _ in 0..fires {
                    due.push(Rc::clone(&timer.callback));
                }
            }
        }
        for callback in due {
            callback();
        }
    }

    fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }
}

impl IntervalScheduler for FakeScheduler {
    fn repeat(&self, interval_ms: u32, callback: Rc<dyn Fn()>) -> IntervalGuard {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.timers.push(FakeTimer { id, interval_ms, elapsed_ms: 0, callback });
            id
        };

        let state = Rc::clone(&self.state);
        IntervalGuard::new(move || state.borrow_mut().timers.retain(|t| t.id != id))
    }
}

fn counting_refresh(
    scheduler: &FakeScheduler,
    interval_ms: u32,
) -> (AutoRefresh<FakeScheduler>, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let refresh = AutoRefresh::with_interval(
        scheduler.clone(),
        move || counter.set(counter.get() + 1),
        interval_ms,
    );
    (refresh, calls)
}

#[test]
fn fires_exactly_once_per_interval() {
    let scheduler = FakeScheduler::default();
    let (mut refresh, calls) = counting_refresh(&scheduler, 1_000);

    refresh.start();
    scheduler.advance(1_000);
    assert_eq!(calls.get(), 1);

    scheduler.advance(1_000);
    assert_eq!(calls.get(), 2);
}

#[test]
fn stop_halts_further_invocations() {
    let scheduler = FakeScheduler::default();
    let (mut refresh, calls) = counting_refresh(&scheduler, 1_000);

    refresh.start();
    scheduler.advance(2_000);
    assert_eq!(calls.get(), 2);

    refresh.stop();
    assert!(!refresh.is_active());
    scheduler.advance(5_000);
    assert_eq!(calls.get(), 2);
}

#[test]
fn double_start_does_not_double_the_rate() {
    let scheduler = FakeScheduler::default();
    let (mut refresh, calls) = counting_refresh(&scheduler, 1_000);

    refresh.start();
    refresh.start();
    assert_eq!(scheduler.active_timers(), 1);

    scheduler.advance(1_000);
    assert_eq!(calls.get(), 1);
}

#[test]
fn restart_resets_elapsed_time() {
    let scheduler = FakeScheduler::default();
    let (mut refresh, calls) = counting_refresh(&scheduler, 1_000);

    refresh.start();
    scheduler.advance(500);

    refresh.restart();
    scheduler.advance(500);
    assert_eq!(calls.get(), 0);

    scheduler.advance(500);
    assert_eq!(calls.get(), 1);
}

#[test]
fn stop_while_idle_is_a_no_op() {
    let scheduler = FakeScheduler::default();
    let (mut refresh, calls) = counting_refresh(&scheduler, 1_000);

    refresh.stop();
    assert!(!refresh.is_active());

    refresh.start();
    assert!(refresh.is_active());
    scheduler.advance(1_000);
    assert_eq!(calls.get(), 1);
}

#[test]
fn dropping_the_refresh_cancels_its_timer() {
    let scheduler = FakeScheduler::default();
    let (mut refresh, calls) = counting_refresh(&scheduler, 1_000);

    refresh.start();
    assert_eq!(scheduler.active_timers(), 1);

    drop(refresh);
    assert_eq!(scheduler.active_timers(), 0);

    scheduler.advance(5_000);
    assert_eq!(calls.get(), 0);
}

#[test]
fn default_interval_is_five_seconds() {
    let scheduler = FakeScheduler::default();
    let refresh = AutoRefresh::new(scheduler, || {});
    assert_eq!(refresh.interval_ms(), DEFAULT_REFRESH_INTERVAL_MS);
    assert_eq!(refresh.interval_ms(), 5_000);
    assert!(!refresh.is_active());
}
