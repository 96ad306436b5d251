//! Static regional price list and conversion rates.

use crate::settings::{Currency, Region};

/// Subscription prices as displayed in a region's own currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalPrice {
    pub region: Region,
    pub monthly: &'static str,
    pub yearly: &'static str,
}

pub const REGIONAL_PRICING: &[RegionalPrice] = &[
    RegionalPrice { region: Region::Global, monthly: "4.99", yearly: "49.99" },
    RegionalPrice { region: Region::In, monthly: "500", yearly: "4,500" },
    RegionalPrice { region: Region::Us, monthly: "4.99", yearly: "49.99" },
    RegionalPrice { region: Region::Uk, monthly: "3.99", yearly: "39.99" },
    RegionalPrice { region: Region::Ca, monthly: "6.49", yearly: "64.99" },
    RegionalPrice { region: Region::Au, monthly: "7.49", yearly: "74.99" },
];

/// Units of each currency per US dollar.
pub const CURRENCY_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("INR", 83.0),
    ("GBP", 0.79),
    ("EUR", 0.92),
    ("CAD", 1.36),
    ("AUD", 1.52),
];

pub fn price_for(region: Region) -> Option<&'static RegionalPrice> {
    REGIONAL_PRICING.iter().find(|p| p.region == region)
}

/// Conversion rate from USD, defaulting to 1.0 for unknown codes.
pub fn rate_for(code: &str) -> f64 {
    CURRENCY_RATES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, rate)| *rate)
        .unwrap_or(1.0)
}

/// Display symbol for a currency code, `$` when unknown.
pub fn symbol_for(code: &str) -> &'static str {
    code.parse::<Currency>().map(|c| c.symbol()).unwrap_or("$")
}
