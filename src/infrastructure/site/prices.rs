//! Raw price rendering for store order totals.

use crate::domain::collaborators::PriceFormatter;

/// Renders order totals as `"<amount> <CURRENCY>"` strings.
///
/// Minor units follow ISO 4217: most currencies use two decimal places,
/// zero-decimal and three-decimal currencies are handled explicitly.
#[derive(Debug, Default)]
pub struct StorePriceFormatter;

impl StorePriceFormatter {
    pub fn new() -> Self {
        Self
    }

    fn minor_units(currency: &str) -> usize {
        match currency {
            "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
            | "UGX" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
            _ => 2,
        }
    }
}

impl PriceFormatter for StorePriceFormatter {
    fn raw_price(&self, amount: f64, currency: &str) -> String {
        let code = currency.trim().to_ascii_uppercase();
        let precision = Self::minor_units(&code);

        format!("{amount:.precision$} {code}")
    }
}
