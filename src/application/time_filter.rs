use leptos::{RwSignal, SignalGet, SignalGetUntracked, SignalSet, create_rw_signal};

use crate::domain::market::TimeFilter;

/// Selection state for the chart-period shortcuts above the price chart
#[derive(Clone, Copy)]
pub struct TimeFilterState {
    selected: RwSignal<TimeFilter>,
}

impl TimeFilterState {
    pub fn new(initial: TimeFilter) -> Self {
        Self { selected: create_rw_signal(initial) }
    }

    pub fn selected(&self) -> TimeFilter {
        self.selected.get()
    }

    /// Read without subscribing; for timer callbacks and async tasks
    pub fn selected_untracked(&self) -> TimeFilter {
        self.selected.get_untracked()
    }

    pub fn set(&self, filter: TimeFilter) {
        self.selected.set(filter);
    }

    pub fn is_selected(&self, filter: TimeFilter) -> bool {
        self.selected.get() == filter
    }
}

impl Default for TimeFilterState {
    fn default() -> Self {
        Self::new(TimeFilter::default())
    }
}
