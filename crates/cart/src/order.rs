//! Order form and its validation.
//!
//! Payment is not processed here; the order only records the method the
//! customer intends to pay with.

use crate::cart::Cart;
use crate::error::{CartError, Result};
use crate::pricing::{Checkout, Pricing, Totals};
use serde::{Deserialize, Serialize};

/// How the order is served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Collected at the counter
    #[default]
    Pickup,
    /// Eaten in
    #[serde(rename = "dinein")]
    DineIn,
}

/// Intended payment method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// UPI transfer
    #[default]
    Upi,
    /// Card at the counter
    Card,
    /// Cash at the counter
    Cash,
}

/// Customer details entered at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    /// Customer name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Optional email
    #[serde(default)]
    pub email: String,
    /// Pickup or dine-in
    #[serde(default)]
    pub service: ServiceType,
    /// Requested time, `"ASAP"` by default
    #[serde(default = "default_time")]
    pub time: String,
    /// Payment method
    #[serde(default)]
    pub payment: PaymentMethod,
}

fn default_time() -> String {
    "ASAP".to_string()
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            service: ServiceType::default(),
            time: default_time(),
            payment: PaymentMethod::default(),
        }
    }
}

/// A validated order ready to hand off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Customer details
    pub form: OrderForm,
    /// Lines at the time of ordering
    pub cart: Cart,
    /// Promo code applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<String>,
    /// Price breakdown
    pub totals: Totals,
}

/// Checks the order can be placed: the cart has items, a name and a phone
/// number are given, and the tip is one of the offered options.
pub fn validate_order(cart: &Cart, form: &OrderForm, pricing: &Pricing, checkout: &Checkout) -> Result<Order> {
    let mut problems = Vec::new();
    if cart.is_empty() {
        problems.push("cart is empty".to_string());
    }
    if form.name.trim().is_empty() {
        problems.push("name is required".to_string());
    }
    if form.phone.trim().is_empty() {
        problems.push("phone is required".to_string());
    }
    if !problems.is_empty() {
        return Err(CartError::Incomplete(problems));
    }
    if !pricing.accepts_tip(checkout.tip_percent) {
        return Err(CartError::InvalidTip(checkout.tip_percent));
    }

    Ok(Order {
        form: form.clone(),
        cart: cart.clone(),
        promo: pricing.find_promotion(&checkout.promo_code).map(|p| p.code.clone()),
        totals: pricing.totals(cart.subtotal(), checkout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::key::LineKey;
    use crate::money::Money;

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartItem {
            key: LineKey::plain(1),
            name: "Flat White".to_string(),
            unit_price: Money::from_cents(450),
            image: None,
        });
        cart
    }

    fn form() -> OrderForm {
        OrderForm {
            name: "Asha".to_string(),
            phone: "+91 98480 22338".to_string(),
            ..OrderForm::default()
        }
    }

    #[test]
    fn test_valid_order() {
        let checkout = Checkout::default().with_promo("coffee10").with_tip(5);
        let order = validate_order(&filled_cart(), &form(), &Pricing::default(), &checkout).unwrap();
        assert_eq!(order.promo.as_deref(), Some("COFFEE10"));
        assert_eq!(order.totals.subtotal, Money::from_cents(450));
        assert_eq!(order.form.time, "ASAP");
    }

    #[test]
    fn test_missing_fields_reported_together() {
        let err = validate_order(&Cart::new(), &OrderForm::default(), &Pricing::default(), &Checkout::default())
            .unwrap_err();
        match err {
            CartError::Incomplete(problems) => assert_eq!(problems.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = OrderForm {
            name: "   ".to_string(),
            ..form()
        };
        let err = validate_order(&filled_cart(), &form, &Pricing::default(), &Checkout::default()).unwrap_err();
        assert!(err.to_string().contains("name is required"));
    }

    #[test]
    fn test_tip_must_be_offered() {
        let checkout = Checkout::default().with_tip(12);
        let err = validate_order(&filled_cart(), &form(), &Pricing::default(), &checkout).unwrap_err();
        assert!(matches!(err, CartError::InvalidTip(12)));
    }

    #[test]
    fn test_form_serde_names() {
        let json = serde_json::to_string(&OrderForm {
            service: ServiceType::DineIn,
            payment: PaymentMethod::Cash,
            ..form()
        })
        .unwrap();
        assert!(json.contains(r#""service":"dinein""#));
        assert!(json.contains(r#""payment":"cash""#));
    }
}
