use std::rc::Rc;
use std::str::FromStr;

use leptos::*;
use strum::IntoEnumIterator;

use crate::application::{
    DEFAULT_REFRESH_INTERVAL_MS, MarketDataService, OrderFormState, TimeFilterState,
    TradeHistoryState, UseAutoRefresh, use_auto_refresh, use_order_form,
};
use crate::domain::history::{AssetFilter, HistoryRange, Transaction};
use crate::domain::market::{CurrencyPair, OrderConfirmation, TimeFilter};
use crate::infrastructure::http::RestTradingGateway;

/// 🦀 Trading terminal root: one page with the market header, the order
/// panel and the trade history below it.
#[component]
pub fn App() -> impl IntoView {
    let pair = create_rw_signal(CurrencyPair::BtcJpy);
    let gateway = Rc::new(RestTradingGateway::default());

    let market = MarketDataService::new(Rc::clone(&gateway), pair);
    let form = use_order_form(pair, market.current_price, market.available_balance);
    let time_filter = TimeFilterState::default();
    let history = TradeHistoryState::new(Rc::clone(&gateway));

    // Pair selection drives a full reload (price + chart + balance); the
    // effect also covers the initial load on mount.
    create_effect({
        let market = market.clone();
        move |_| {
            let _ = pair.get();
            let market = market.clone();
            spawn_local(async move {
                let filter = time_filter.selected_untracked();
                market.fetch_all_data(filter).await;
            });
        }
    });

    // Chart-period switches only refresh the market data, and only on an
    // actual change, not on mount.
    create_effect({
        let market = market.clone();
        move |previous: Option<TimeFilter>| {
            let filter = time_filter.selected();
            if previous.is_some_and(|p| p != filter) {
                let market = market.clone();
                spawn_local(async move {
                    market.fetch_crypto_data(filter).await;
                });
            }
            filter
        }
    });

    {
        let history = history.clone();
        spawn_local(async move {
            history.refresh().await;
        });
    }

    let refresh = use_auto_refresh(
        {
            let market = market.clone();
            move || {
                let market = market.clone();
                spawn_local(async move {
                    let filter = time_filter.selected_untracked();
                    market.fetch_all_data(filter).await;
                });
            }
        },
        DEFAULT_REFRESH_INTERVAL_MS,
    );
    refresh.start();

    view! {
        <style>{STYLES}</style>
        <div class="trading-terminal">
            <MarketHeader market=market.clone() pair=pair refresh=refresh/>
            <OrderPanel market=market form=form time_filter=time_filter/>
            <TradeHistoryPanel history=history/>
        </div>
    }
}

/// 📊 Pair selector, live price and refresh indicator
#[component]
fn MarketHeader(
    market: MarketDataService<RestTradingGateway>,
    pair: RwSignal<CurrencyPair>,
    refresh: UseAutoRefresh,
) -> impl IntoView {
    let current_price = market.current_price;
    let price_change = market.price_change;
    let loading = market.loading;
    let is_active = refresh.is_active();

    view! {
        <div class="header">
            <h1>"🪙 Trading Terminal"</h1>
            <select
                class="pair-select"
                on:change=move |ev| {
                    if let Ok(selected) = CurrencyPair::from_str(&event_target_value(&ev)) {
                        pair.set(selected);
                    }
                }
            >
                {CurrencyPair::iter()
                    .map(|p| {
                        view! {
                            <option value=p.to_string() selected=move || pair.get() == p>
                                {p.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <div class="price-info">
                <div class="price-item">
                    <div class="price-value">
                        {move || format!("¥{:.0}", current_price.get())}
                    </div>
                    <div class="price-label">"Current Price"</div>
                </div>
                <div class="price-item">
                    <div
                        class="price-value"
                        class:negative=move || price_change.get() < 0.0
                    >
                        {move || format!("{:+.1}%", price_change.get())}
                    </div>
                    <div class="price-label">"24h Change"</div>
                </div>
                <div class="price-item">
                    <div class="price-value">
                        {move || if is_active.get() { "🟢 AUTO" } else { "🔴 OFF" }}
                    </div>
                    <div class="price-label">
                        {move || if loading.get() { "Refreshing…" } else { "Auto refresh" }}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 📝 Limit-order form: price with discount shortcuts, amount stepper,
/// estimated total and validation state
#[component]
fn OrderPanel(
    market: MarketDataService<RestTradingGateway>,
    form: OrderFormState,
    time_filter: TimeFilterState,
) -> impl IntoView {
    let form_error = create_rw_signal(String::new());
    let last_order = create_rw_signal(None::<OrderConfirmation>);
    let gateway_error = market.error;

    let submit = {
        let market = market.clone();
        move |_: ev::MouseEvent| match form.validate() {
            Err(rejection) => form_error.set(rejection.to_string()),
            Ok(()) => {
                form_error.set(String::new());
                let market = market.clone();
                let price = form.price();
                let amount = form.amount();
                spawn_local(async move {
                    if let Ok(confirmation) = market.submit_order(price, amount).await {
                        last_order.set(Some(confirmation));
                        form.reset();
                    }
                });
            }
        }
    };

    view! {
        <div class="order-panel">
            <h2>"Limit Order"</h2>

            <div class="filter-row">
                {TimeFilter::iter()
                    .map(|f| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || time_filter.is_selected(f)
                                on:click=move |_| time_filter.set(f)
                            >
                                {f.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="field-label">"Price (JPY)"</label>
            <div class="field-row">
                <input
                    type="number"
                    class="field-input"
                    prop:value=move || form.price().to_string()
                    on:input=move |ev| {
                        form.set_price(event_target_value(&ev).parse().unwrap_or(0.0));
                    }
                />
                {[90.0, 95.0, 99.0]
                    .into_iter()
                    .map(|pct| {
                        view! {
                            <button
                                class="chip"
                                on:click=move |_| form.set_discount_price(pct)
                            >
                                {format!("{pct:.0}%")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="field-label">"Amount"</label>
            <div class="field-row">
                <button class="chip" on:click=move |_| form.decrement_amount()>"−"</button>
                <input
                    type="number"
                    class="field-input"
                    prop:value=move || form.amount().to_string()
                    on:input=move |ev| {
                        form.set_amount(event_target_value(&ev).parse().unwrap_or(0.0));
                    }
                />
                <button class="chip" on:click=move |_| form.increment_amount()>"+"</button>
                <span class="hint">{move || format!("min {}", form.min_amount())}</span>
            </div>

            <div class="totals">
                <span>"Estimated total"</span>
                <span class="price-value">
                    {move || format!("¥{:.0}", form.estimated_total())}
                </span>
            </div>

            <button
                class="submit"
                disabled=move || !form.is_valid()
                on:click=submit
            >
                "Place Order"
            </button>

            <div class="messages">
                {move || (!form_error.get().is_empty()).then(|| {
                    view! { <p class="error">{form_error.get()}</p> }
                })}
                {move || gateway_error.get().map(|e| {
                    view! { <p class="error">{e.user_message()}</p> }
                })}
                {move || last_order.get().map(|order| {
                    view! { <p class="success">{format!("Order accepted: {}", order.order_id)}</p> }
                })}
            </div>
        </div>
    }
}

/// 📒 Trade history: filters, statistics cards and settled trades
#[component]
fn TradeHistoryPanel(history: TradeHistoryState<RestTradingGateway>) -> impl IntoView {
    let displayed = history.displayed_transactions();
    let statistics = history.statistics();

    view! {
        <div class="history-panel">
            <h2>"Trade History"</h2>

            <div class="filter-row">
                {AssetFilter::iter()
                    .map(|f| {
                        let history = history.clone();
                        let asset_filter = history.asset_filter;
                        view! {
                            <button
                                class="chip"
                                class:active=move || asset_filter.get() == f
                                on:click=move |_| history.set_asset_filter(f)
                            >
                                {f.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
                {HistoryRange::iter()
                    .map(|r| {
                        let history = history.clone();
                        let time_range = history.time_range;
                        view! {
                            <button
                                class="chip"
                                class:active=move || time_range.get() == r
                                on:click=move |_| history.set_time_range(r)
                            >
                                {r.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="price-info">
                <div class="price-item">
                    <div class="price-value">
                        {move || format!("¥{:.1}", statistics.get().total_profit)}
                    </div>
                    <div class="price-label">"Total Profit"</div>
                </div>
                <div class="price-item">
                    <div class="price-value">
                        {move || format!("{:.1}%", statistics.get().profit_percentage)}
                    </div>
                    <div class="price-label">"Profit Rate"</div>
                </div>
                <div class="price-item">
                    <div class="price-value">
                        {move || statistics.get().execution_count.to_string()}
                    </div>
                    <div class="price-label">"Executions"</div>
                </div>
            </div>

            <div class="tx-list">
                {move || {
                    displayed
                        .get()
                        .into_iter()
                        .map(|t| transaction_row(&t))
                        .collect_view()
                }}
            </div>

            {
                let for_disabled = history.clone();
                let for_click = history.clone();
                view! {
                    <button
                        class="chip load-more"
                        disabled=move || !for_disabled.can_load_more()
                        on:click=move |_| for_click.load_more()
                    >
                        "Load more"
                    </button>
                }
            }
        </div>
    }
}

fn transaction_row(transaction: &Transaction) -> impl IntoView + use<> {
    let profit = transaction.profit;
    view! {
        <div class="tx-row">
            <span class="tx-id">{transaction.order_id.clone()}</span>
            <span>{transaction.cryptocurrency.clone()}</span>
            <span>{format_date(transaction.timestamp_ms)}</span>
            <span>{format!("{} @ ¥{:.0}", transaction.amount, transaction.sell_price)}</span>
            <span class="price-value" class:negative=move || profit < 0.0>
                {format!("{profit:+.1}")}
            </span>
        </div>
    }
}

/// YYYY/MM/DD in local time
fn format_date(timestamp_ms: f64) -> String {
    let date = js_sys::Date::new(&timestamp_ms.into());
    format!("{}/{:02}/{:02}", date.get_full_year(), date.get_month() + 1, date.get_date())
}

const STYLES: &str = r#"
.trading-terminal {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
    min-height: 100vh;
    padding: 20px;
    color: white;
}

.header, .order-panel, .history-panel {
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
    padding: 20px;
    border-radius: 15px;
    border: 1px solid rgba(255, 255, 255, 0.2);
    margin-bottom: 20px;
}

.header { text-align: center; }

.pair-select {
    background: #2a5298;
    color: white;
    border: 1px solid rgba(255, 255, 255, 0.4);
    border-radius: 8px;
    padding: 6px 12px;
    font-size: 16px;
}

.price-info {
    display: flex;
    justify-content: center;
    gap: 40px;
    margin-top: 15px;
}

.price-item { text-align: center; }

.price-value {
    font-size: 24px;
    font-weight: 700;
    color: #72c685;
    font-family: 'Courier New', monospace;
}

.price-value.negative { color: #e06c75; }

.price-label {
    font-size: 12px;
    color: #a0a0a0;
    margin-top: 5px;
}

.field-label {
    display: block;
    font-size: 12px;
    color: #a0a0a0;
    margin: 12px 0 4px;
}

.field-row { display: flex; gap: 8px; align-items: center; }

.field-input {
    background: rgba(0, 0, 0, 0.3);
    color: white;
    border: 1px solid #4a5d73;
    border-radius: 6px;
    padding: 8px;
    width: 180px;
    font-family: 'Courier New', monospace;
}

.chip {
    background: #4a5d73;
    color: white;
    border: none;
    padding: 6px 12px;
    border-radius: 6px;
    cursor: pointer;
    font-size: 13px;
}

.chip:hover { background: #5a6d83; }
.chip.active { background: #f39c12; }
.chip:disabled { opacity: 0.4; cursor: default; }

.hint { font-size: 12px; color: #a0a0a0; }

.totals {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    margin: 15px 0;
}

.submit {
    background: #72c685;
    color: #0b2239;
    border: none;
    width: 100%;
    padding: 12px;
    border-radius: 8px;
    font-size: 16px;
    font-weight: 700;
    cursor: pointer;
}

.submit:disabled { opacity: 0.4; cursor: default; }

.messages .error { color: #e06c75; }
.messages .success { color: #72c685; }

.filter-row { display: flex; gap: 8px; margin-bottom: 12px; }

.tx-list { margin-top: 15px; }

.tx-row {
    display: flex;
    justify-content: space-between;
    gap: 10px;
    padding: 8px 4px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 14px;
}

.tx-row .price-value { font-size: 14px; }

.tx-id { color: #a0a0a0; font-family: 'Courier New', monospace; }

.load-more { margin-top: 12px; }
"#;
