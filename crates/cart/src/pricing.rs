//! Checkout totals: promo discount, tip and tax.
//!
//! Tip and tax are both charged on the discounted subtotal:
//!
//! ```text
//! discount = promotion(subtotal)
//! tip      = (subtotal - discount) × tip%
//! tax      = (subtotal - discount) × tax_rate
//! total    = max(0, subtotal - discount) + tip + tax
//! ```

use crate::money::Money;
use cafe_core::config::{CheckoutConfig, PromotionConfig};
use serde::Serialize;
use tracing::debug;

/// How a promotion reduces the subtotal.
#[derive(Debug, Clone, PartialEq)]
pub enum Discount {
    /// Percentage of the subtotal, optionally capped
    Percent {
        /// Percentage taken off
        percent: f64,
        /// Largest discount granted
        cap: Option<Money>,
    },
    /// Fixed amount, never more than the subtotal
    Flat(Money),
}

/// A promo code.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    /// Canonical (upper-case) code
    pub code: String,
    /// Discount granted
    pub discount: Discount,
}

impl Promotion {
    /// Percentage promotion.
    pub fn percent(code: &str, percent: f64, cap: Option<Money>) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            discount: Discount::Percent { percent, cap },
        }
    }

    /// Flat promotion.
    pub fn flat(code: &str, amount: Money) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            discount: Discount::Flat(amount),
        }
    }

    /// Discount on `subtotal`, between zero and the subtotal.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        let raw = match &self.discount {
            Discount::Percent { percent, cap } => {
                let off = subtotal.percent(*percent);
                cap.map_or(off, |cap| off.min(cap))
            }
            Discount::Flat(amount) => *amount,
        };
        raw.min(subtotal).non_negative()
    }

    fn from_config(config: &PromotionConfig) -> Self {
        let cap = config.max_discount.map(Money::from_major);
        match (config.percent_off, config.amount_off) {
            (Some(percent), _) => Promotion::percent(&config.code, percent, cap),
            (None, Some(amount)) => {
                let amount = Money::from_major(amount);
                Promotion::flat(&config.code, cap.map_or(amount, |cap| amount.min(cap)))
            }
            (None, None) => Promotion::flat(&config.code, Money::ZERO),
        }
    }
}

/// Customer choices at checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkout {
    /// Promo code as typed; blank means none
    pub promo_code: String,
    /// Tip percentage of the discounted subtotal
    pub tip_percent: u32,
}

impl Checkout {
    /// Sets the promo code.
    #[must_use]
    pub fn with_promo(mut self, code: impl Into<String>) -> Self {
        self.promo_code = code.into();
        self
    }

    /// Sets the tip percentage.
    #[must_use]
    pub fn with_tip(mut self, percent: u32) -> Self {
        self.tip_percent = percent;
        self
    }
}

/// Breakdown shown on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Σ line totals
    pub subtotal: Money,
    /// Promo discount
    pub discount: Money,
    /// Tip
    pub tip: Money,
    /// Tax
    pub tax: Money,
    /// Amount due
    pub total: Money,
}

/// Promotions and tax rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    promotions: Vec<Promotion>,
    tax_rate: f64,
    tip_options: Vec<u32>,
}

impl Default for Pricing {
    /// `COFFEE10` (10% off, at most $20), 7% tax, tips of 0/5/10/15/20%.
    fn default() -> Self {
        Self::from_config(&CheckoutConfig::default())
    }
}

impl Pricing {
    /// Pricing with the given promotions and tax rate; any tip is accepted.
    pub fn new(promotions: Vec<Promotion>, tax_rate: f64) -> Self {
        Self {
            promotions,
            tax_rate,
            tip_options: Vec::new(),
        }
    }

    /// Pricing from the `[checkout]` config section.
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self {
            promotions: config.promotions.iter().map(Promotion::from_config).collect(),
            tax_rate: config.tax_rate,
            tip_options: config.tip_options.clone(),
        }
    }

    /// Tax rate as a fraction.
    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Offered tip percentages; empty means any.
    pub fn tip_options(&self) -> &[u32] {
        &self.tip_options
    }

    /// True if `percent` may be chosen as a tip.
    pub fn accepts_tip(&self, percent: u32) -> bool {
        self.tip_options.is_empty() || self.tip_options.contains(&percent)
    }

    /// Looks up a promotion; codes are trimmed and matched case-insensitively.
    pub fn find_promotion(&self, code: &str) -> Option<&Promotion> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.promotions.iter().find(|p| p.code.eq_ignore_ascii_case(code))
    }

    /// Computes the checkout breakdown. Unknown promo codes grant nothing.
    pub fn totals(&self, subtotal: Money, checkout: &Checkout) -> Totals {
        let discount = match self.find_promotion(&checkout.promo_code) {
            Some(promo) => promo.discount_for(subtotal),
            None => {
                if !checkout.promo_code.trim().is_empty() {
                    debug!(code = %checkout.promo_code, "Unknown promo code");
                }
                Money::ZERO
            }
        };

        let discounted = subtotal - discount;
        let tip = discounted.percent(f64::from(checkout.tip_percent));
        let tax = discounted.scale(self.tax_rate);
        let total = discounted.non_negative() + tip + tax;

        Totals {
            subtotal,
            discount,
            tip,
            tax,
            total,
        }
    }
}
