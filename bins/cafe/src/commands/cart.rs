//! Cart and checkout commands

use crate::app::{print_json, App};
use anyhow::{anyhow, bail, Result};
use cafe_cart::{
    validate_order, CartError, CartItem, CartStore, Checkout, LineKey, OrderForm, PaymentMethod,
    ServiceType, Totals,
};
use cafe_catalog::Selection;
use cafe_cli::output::{format_count, receipt_row, Status, RECEIPT_WIDTH};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;

/// `--service` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceArg {
    /// Collect at the counter
    Pickup,
    /// Eat in
    Dinein,
}

impl From<ServiceArg> for ServiceType {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Pickup => ServiceType::Pickup,
            ServiceArg::Dinein => ServiceType::DineIn,
        }
    }
}

/// `--payment` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentArg {
    /// UPI transfer
    Upi,
    /// Card at the counter
    Card,
    /// Cash at the counter
    Cash,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Upi => PaymentMethod::Upi,
            PaymentArg::Card => PaymentMethod::Card,
            PaymentArg::Cash => PaymentMethod::Cash,
        }
    }
}

fn open_store(app: &App) -> Result<CartStore> {
    Ok(CartStore::load(app.storage()?))
}

/// Key of the 1-based `line` as listed by `cart show`
fn line_key(store: &CartStore, line: usize) -> Result<LineKey> {
    let lines = store.cart().lines();
    line.checked_sub(1)
        .and_then(|idx| lines.get(idx))
        .map(|l| l.key.clone())
        .ok_or_else(|| anyhow!("No line {line}; the cart has {}", format_count(lines.len(), "line", "lines")))
}

/// Add one of a menu item, with options
pub fn add(app: &App, id: u32, variant: Option<&str>, add_ons: &[String]) -> Result<()> {
    let catalog = app.catalog()?;
    let item = catalog.get(id).ok_or_else(|| anyhow!("No menu item with id {id}"))?;

    let mut selection = Selection::new(item);
    if let Some(variant) = variant {
        selection = selection.with_variant(variant)?;
    }
    for add_on in add_ons {
        selection = selection.with_add_on(add_on)?;
    }

    let cart_item = CartItem::from_selection(&selection);
    let label = format!("{} ({})", cart_item.name, cart_item.unit_price);

    let mut store = open_store(app)?;
    store.add(cart_item)?;

    if app.json() {
        return print_json(store.cart());
    }
    Status::success(&format!("Added {label}"));
    summary(&store);
    Ok(())
}

/// Add one more of a line
pub fn increment(app: &App, line: usize) -> Result<()> {
    let mut store = open_store(app)?;
    let key = line_key(&store, line)?;
    store.increment(&key)?;
    report(app, &store, &format!("Line {line} increased"))
}

/// Take one away from a line
pub fn decrement(app: &App, line: usize) -> Result<()> {
    let mut store = open_store(app)?;
    let key = line_key(&store, line)?;
    let removed = store.decrement(&key)? && store.cart().get(&key).is_none();
    let message = if removed {
        format!("Line {line} removed")
    } else {
        format!("Line {line} decreased")
    };
    report(app, &store, &message)
}

/// Remove a line
pub fn remove(app: &App, line: usize) -> Result<()> {
    let mut store = open_store(app)?;
    let key = line_key(&store, line)?;
    store.remove(&key)?;
    report(app, &store, &format!("Line {line} removed"))
}

/// Empty the cart
pub fn clear(app: &App) -> Result<()> {
    let mut store = open_store(app)?;
    store.clear()?;
    report(app, &store, "Cart cleared")
}

fn report(app: &App, store: &CartStore, message: &str) -> Result<()> {
    if app.json() {
        return print_json(store.cart());
    }
    Status::success(message);
    summary(store);
    Ok(())
}

fn summary(store: &CartStore) {
    let cart = store.cart();
    println!(
        "  {}",
        format!(
            "{} · subtotal {}",
            format_count(cart.item_count() as usize, "item", "items"),
            cart.subtotal()
        )
        .dimmed()
    );
}

/// Show the cart with totals
pub fn show(app: &App, promo: &str, tip: u32) -> Result<()> {
    let store = open_store(app)?;
    let pricing = app.pricing();
    if !pricing.accepts_tip(tip) {
        return Err(CartError::InvalidTip(tip).into());
    }
    let checkout = Checkout::default().with_promo(promo).with_tip(tip);
    let totals = store.totals(&pricing, &checkout);

    if app.json() {
        return print_json(&json!({ "lines": store.cart(), "totals": totals }));
    }

    Status::header("Your cart");
    if store.cart().is_empty() {
        Status::info("The cart is empty");
        return Ok(());
    }

    for (idx, line) in store.cart().lines().iter().enumerate() {
        let label = format!("{}. {} × {}", idx + 1, line.qty, line.name);
        println!("  {}", receipt_row(&label, &line.line_total().to_string(), RECEIPT_WIDTH + 12));
    }

    if !promo.trim().is_empty() && pricing.find_promotion(promo).is_none() {
        Status::warning(&format!("Promo code {} is not valid", promo.trim()));
    }
    print_totals(&totals, tip);
    Ok(())
}

fn print_totals(totals: &Totals, tip: u32) {
    let width = RECEIPT_WIDTH + 12;
    println!();
    println!("  {}", receipt_row("Subtotal", &totals.subtotal.to_string(), width));
    if totals.discount.cents() > 0 {
        println!("  {}", receipt_row("Discount", &format!("-{}", totals.discount), width).green());
    }
    if totals.tip.cents() > 0 {
        println!("  {}", receipt_row(&format!("Tip ({tip}%)"), &totals.tip.to_string(), width));
    }
    println!("  {}", receipt_row("Tax", &totals.tax.to_string(), width));
    println!("  {}", receipt_row("Total", &totals.total.to_string(), width).bold());
}

/// Validate the order, print it and empty the cart
pub fn checkout(app: &App, form: OrderForm, promo: &str, tip: u32) -> Result<()> {
    let mut store = open_store(app)?;
    let pricing = app.pricing();
    let checkout = Checkout::default().with_promo(promo).with_tip(tip);

    let order = match validate_order(store.cart(), &form, &pricing, &checkout) {
        Ok(order) => order,
        Err(CartError::Incomplete(problems)) if !app.json() => {
            for problem in &problems {
                Status::error(problem);
            }
            bail!(CartError::Incomplete(problems));
        }
        Err(e) => return Err(e.into()),
    };

    store.clear()?;

    if app.json() {
        return print_json(&order);
    }

    Status::header(&format!("Order for {}", order.form.name));
    for line in order.cart.lines() {
        let label = format!("{} × {}", line.qty, line.name);
        println!("  {}", receipt_row(&label, &line.line_total().to_string(), RECEIPT_WIDTH + 12));
    }
    if let Some(code) = &order.promo {
        println!("  {}", format!("Promo {code} applied").green());
    }
    print_totals(&order.totals, tip);
    println!();
    Status::success(&format!(
        "Order placed for {} ({:?}, pay by {:?})",
        order.form.time, order.form.service, order.form.payment
    ));
    Ok(())
}
