//! Resolves the subscription price shown for a currency.

use serde::Serialize;

use super::table::{price_for, rate_for, symbol_for};
use crate::settings::{Currency, Region};

/// Prices ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub currency: String,
    pub symbol: &'static str,
    pub monthly: String,
    pub yearly: String,
    /// True when a region prices natively in this currency.
    pub is_direct: bool,
}

impl PriceQuote {
    pub fn monthly_display(&self) -> String {
        format!("{}{}", self.symbol, self.monthly)
    }

    pub fn yearly_display(&self) -> String {
        format!("{}{}", self.symbol, self.yearly)
    }
}

pub fn resolve_price(currency: Currency) -> PriceQuote {
    resolve_price_for_code(&currency.to_string())
}

/// Resolves prices for any currency code. Never fails.
///
/// A non-GLOBAL region whose currency matches is used verbatim; otherwise the
/// GLOBAL USD price is converted with the static rate table.
pub fn resolve_price_for_code(code: &str) -> PriceQuote {
    let code = code.trim().to_ascii_uppercase();
    let symbol = symbol_for(&code);

    let direct = code.parse::<Currency>().ok().and_then(|currency| {
        Region::all()
            .into_iter()
            .filter(|r| *r != Region::Global && r.currency() == currency)
            .find_map(price_for)
    });

    if let Some(price) = direct {
        return PriceQuote {
            currency: code,
            symbol,
            monthly: price.monthly.to_string(),
            yearly: price.yearly.to_string(),
            is_direct: true,
        };
    }

    let rate = rate_for(&code);
    let (monthly, yearly) = match price_for(Region::Global) {
        Some(global) => (convert(global.monthly, rate), convert(global.yearly, rate)),
        None => (String::from("-"), String::from("-")),
    };

    PriceQuote {
        currency: code,
        symbol,
        monthly,
        yearly,
        is_direct: false,
    }
}

fn convert(amount: &str, rate: f64) -> String {
    match amount.replace(',', "").parse::<f64>() {
        Ok(base) => format_amount(base * rate),
        Err(_) => amount.to_string(),
    }
}

/// Two decimals with comma thousands separators, e.g. `4,149.17`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
