//! Region-aware subscription pricing.

mod resolver;
mod table;

pub use resolver::{PriceQuote, format_amount, resolve_price, resolve_price_for_code};
pub use table::{CURRENCY_RATES, REGIONAL_PRICING, RegionalPrice, price_for, rate_for, symbol_for};
