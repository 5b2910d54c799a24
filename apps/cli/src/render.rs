//! # Output Rendering
//!
//! Turns a [`CalculationResult`] into text for the terminal. Rounding to
//! cents happens here and nowhere else.
//!
//! ```text
//! ═══════════════════════════════════════
//!          DVD SHOP - RECEIPT
//! ═══════════════════════════════════════
//!
//! Back to the Future DVDs: 3
//!   Base price: 45 €
//!   Discount: -20%
//!   After discount: 36 €
//!
//! Other DVDs: 1
//!   Price: 20 €
//!
//! ───────────────────────────────────────
//! TOTAL: 56 €
//! ═══════════════════════════════════════
//! ```

use dvd_core::{CalculationResult, Money};
use serde::Serialize;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::AppResult;

const DOUBLE_RULE: &str = "═══════════════════════════════════════";
const SINGLE_RULE: &str = "───────────────────────────────────────";

// =============================================================================
// Price Formatter
// =============================================================================

/// Formats prices as `40,5 €`: up to two fraction digits, trailing zeros
/// dropped, symbol after the amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    currency_symbol: String,
    decimal_separator: char,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        PriceFormatter::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for PriceFormatter {
    fn from(display: &DisplayConfig) -> Self {
        PriceFormatter {
            currency_symbol: display.currency_symbol.clone(),
            decimal_separator: display.decimal_separator,
        }
    }
}

impl PriceFormatter {
    pub fn format_price(&self, price: Money) -> String {
        let cents = price.rounded_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let whole = cents.unsigned_abs() / 100;
        let frac = cents.unsigned_abs() % 100;

        let amount = match frac {
            0 => format!("{sign}{whole}"),
            f if f % 10 == 0 => format!("{sign}{whole}{}{}", self.decimal_separator, f / 10),
            f => format!("{sign}{whole}{}{f:02}", self.decimal_separator),
        };

        format!("{amount} {}", self.currency_symbol)
    }

    /// Boxed receipt. Sections for empty categories are left out, as are the
    /// discount lines when no rule applied.
    pub fn format_receipt(&self, result: &CalculationResult) -> String {
        let breakdown = &result.breakdown;
        let mut lines = vec![
            DOUBLE_RULE.to_string(),
            "         DVD SHOP - RECEIPT".to_string(),
            DOUBLE_RULE.to_string(),
            String::new(),
        ];

        if breakdown.special_count > 0 {
            lines.push(format!("Back to the Future DVDs: {}", breakdown.special_count));
            lines.push(format!(
                "  Base price: {}",
                self.format_price(breakdown.special_base_price)
            ));

            if let Some(discount) = &result.discount_applied {
                lines.push(format!("  Discount: -{discount}"));
                lines.push(format!(
                    "  After discount: {}",
                    self.format_price(breakdown.special_discounted_price)
                ));
            }

            lines.push(String::new());
        }

        if breakdown.other_count > 0 {
            lines.push(format!("Other DVDs: {}", breakdown.other_count));
            lines.push(format!("  Price: {}", self.format_price(breakdown.other_price)));
            lines.push(String::new());
        }

        lines.push(SINGLE_RULE.to_string());
        lines.push(format!("TOTAL: {}", self.format_price(result.total_price)));
        lines.push(DOUBLE_RULE.to_string());

        lines.join("\n")
    }

    pub fn format_simple(&self, result: &CalculationResult) -> String {
        format!("Prix total: {}", self.format_price(result.total_price))
    }

    /// JSON view of the result, with the formatted total alongside the raw
    /// numbers.
    pub fn format_json(&self, result: &CalculationResult) -> AppResult<String> {
        let breakdown = &result.breakdown;
        let view = JsonReceipt {
            total_price: result.total_price,
            currency: &result.currency,
            formatted_price: self.format_price(result.total_price),
            items_count: result.items_count,
            discount_applied: result.discount_applied.as_deref(),
            breakdown: JsonBreakdown {
                special_items: SpecialItems {
                    count: breakdown.special_count,
                    base_price: breakdown.special_base_price,
                    discounted_price: breakdown.special_discounted_price,
                },
                other_items: OtherItems {
                    count: breakdown.other_count,
                    price: breakdown.other_price,
                },
            },
        };

        Ok(serde_json::to_string_pretty(&view)?)
    }

    pub fn render(&self, result: &CalculationResult, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Receipt => Ok(self.format_receipt(result)),
            OutputFormat::Simple => Ok(self.format_simple(result)),
            OutputFormat::Json => self.format_json(result),
        }
    }
}

// =============================================================================
// JSON View
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReceipt<'a> {
    total_price: Money,
    currency: &'a str,
    formatted_price: String,
    items_count: usize,
    discount_applied: Option<&'a str>,
    breakdown: JsonBreakdown,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBreakdown {
    special_items: SpecialItems,
    other_items: OtherItems,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpecialItems {
    count: usize,
    base_price: Money,
    discounted_price: Money,
}

#[derive(Debug, Serialize)]
struct OtherItems {
    count: usize,
    price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
