pub mod auto_refresh;
pub mod market_data;
pub mod order_form;
pub mod time_filter;
pub mod trade_history;

pub use auto_refresh::*;
pub use market_data::*;
pub use order_form::*;
pub use time_filter::*;
pub use trade_history::*;
