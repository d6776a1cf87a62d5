use leptos::{
    RwSignal, SignalGet, SignalGetUntracked, SignalUpdate, SignalWith, SignalWithUntracked,
    create_effect, create_rw_signal,
};

use crate::domain::market::CurrencyPair;
use crate::domain::order::{OrderForm, OrderRejection};

/// Reactive binding around the [`OrderForm`] reducer.
///
/// Pair switches and market ticks are propagated through the reducer inside
/// effects, so they land in the same update cycle as the triggering signal
/// change. Derived values are read through `with`, which keeps them
/// tracked without caching anything beyond the signal itself.
#[derive(Clone, Copy)]
pub struct OrderFormState {
    form: RwSignal<OrderForm>,
}

impl OrderFormState {
    pub fn price(&self) -> f64 {
        self.form.with(|f| f.price)
    }

    pub fn set_price(&self, price: f64) {
        self.form.update(|f| f.price = price);
    }

    pub fn amount(&self) -> f64 {
        self.form.with(|f| f.amount)
    }

    pub fn set_amount(&self, amount: f64) {
        self.form.update(|f| f.amount = amount);
    }

    pub fn pair(&self) -> CurrencyPair {
        self.form.with(|f| f.pair())
    }

    pub fn estimated_total(&self) -> f64 {
        self.form.with(|f| f.estimated_total())
    }

    pub fn min_amount(&self) -> f64 {
        self.form.with(|f| f.min_amount())
    }

    pub fn step(&self) -> f64 {
        self.form.with(|f| f.step())
    }

    pub fn is_balance_sufficient(&self) -> bool {
        self.form.with(|f| f.is_balance_sufficient())
    }

    pub fn is_valid(&self) -> bool {
        self.form.with(|f| f.is_valid())
    }

    pub fn increment_amount(&self) {
        self.form.update(|f| f.increment_amount());
    }

    pub fn decrement_amount(&self) {
        self.form.update(|f| f.decrement_amount());
    }

    pub fn set_discount_price(&self, percentage: f64) {
        self.form.update(|f| f.set_discount_price(percentage));
    }

    pub fn validate(&self) -> Result<(), OrderRejection> {
        self.form.with_untracked(|f| f.validate())
    }

    pub fn reset(&self) {
        self.form.update(|f| f.reset());
    }
}

/// Build the form state and wire its reactive propagation: a `pair` change
/// resets the amount and re-derives the price, a `current_price` tick
/// re-derives the price, and balance refreshes keep the sufficiency check
/// honest.
pub fn use_order_form(
    pair: RwSignal<CurrencyPair>,
    current_price: RwSignal<f64>,
    available_balance: RwSignal<f64>,
) -> OrderFormState {
    let form = create_rw_signal(OrderForm::new(
        pair.get_untracked(),
        current_price.get_untracked(),
        available_balance.get_untracked(),
    ));

    create_effect(move |_| {
        let selected = pair.get();
        form.update(|f| f.set_pair(selected));
    });

    create_effect(move |_| {
        let tick = current_price.get();
        form.update(|f| f.set_current_price(tick));
    });

    create_effect(move |_| {
        let balance = available_balance.get();
        form.update(|f| f.set_available_balance(balance));
    });

    OrderFormState { form }
}
