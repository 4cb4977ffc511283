//! Menu browsing commands

use crate::app::{print_json, App};
use anyhow::{anyhow, Result};
use cafe_cart::Money;
use cafe_catalog::{Category, MenuItem, MenuQuery, PrepTime, SortKey, VegMode, SUBNAV_CATEGORY};
use cafe_cli::output::{format_count, Status};
use owo_colors::OwoColorize;

/// Filters as given on the command line
pub struct MenuArgs {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: String,
    pub sub: Option<String>,
    pub veg: String,
    pub page: usize,
    pub page_size: Option<usize>,
}

/// Run the menu listing
pub fn run(app: &App, args: &MenuArgs) -> Result<()> {
    let catalog = app.catalog()?;

    let category = args.category.as_deref().map(str::parse::<Category>).transpose()?;
    let sort: SortKey = args.sort.parse()?;
    let veg: VegMode = args.veg.parse()?;

    let mut query = MenuQuery::new(args.page_size.unwrap_or(app.config.schema.menu.page_size));
    query.set_category(category);
    query.set_query(args.search.clone().unwrap_or_default());
    query.set_sub_category(args.sub.clone());
    query.set_veg(veg);
    query.set_sort(sort);
    query.go_to(catalog.items(), args.page);

    if category != Some(SUBNAV_CATEGORY) && (args.sub.is_some() || veg != VegMode::All) {
        Status::warning(&format!("--sub and --veg only apply to {SUBNAV_CATEGORY}"));
    }

    let page = query.run(catalog.items());

    if app.json() {
        return print_json(&page);
    }

    let title = category.map_or("All items", Category::as_str);
    Status::header(&format!("{} · {title}", app.config.schema.cafe.name));

    if page.items.is_empty() {
        Status::info("Nothing matches those filters");
        return Ok(());
    }

    for item in &page.items {
        print_row(item);
    }

    println!();
    println!(
        "  {}",
        format!("Page {} of {} · sorted by {sort}", page.page, page.page_count).dimmed()
    );
    Ok(())
}

fn print_row(item: &MenuItem) {
    println!(
        "  {:>3}  {:<28} {:>8}  {:>8}  {}",
        item.id.dimmed(),
        item.name.bold(),
        Money::from_cents(item.price_minor()).to_string(),
        prep_label(item.prep_time()),
        format!("★ {:.1}", item.rating).yellow()
    );
}

fn prep_label(prep: PrepTime) -> String {
    match prep {
        PrepTime::Ready => "Ready".to_string(),
        PrepTime::Minutes(m) => format!("{m} min"),
        PrepTime::Unknown => "-".to_string(),
    }
}

/// Show a single item
pub fn show_item(app: &App, id: u32) -> Result<()> {
    let catalog = app.catalog()?;
    let item = catalog.get(id).ok_or_else(|| anyhow!("No menu item with id {id}"))?;

    if app.json() {
        return print_json(item);
    }

    Status::header(&item.name);
    if let Some(subtitle) = &item.subtitle {
        println!("  {}", subtitle.italic());
    }
    if !item.description.is_empty() {
        println!("  {}", item.description);
    }
    println!();
    println!("  Price      {}", Money::from_cents(item.price_minor()));
    println!("  Category   {}", item.category);
    println!("  Prep time  {}", prep_label(item.prep_time()));
    println!("  Rating     {:.1}", item.rating);
    if !item.tags.is_empty() {
        println!("  Tags       {}", item.tags.join(", "));
    }

    if !item.variants.is_empty() {
        Status::subheader(&format_count(item.variants.len(), "variant", "variants"));
        for variant in &item.variants {
            println!("  {:<20} {}", variant.name, variant.price);
        }
    }

    if !item.add_ons.is_empty() {
        Status::subheader(&format_count(item.add_ons.len(), "add-on", "add-ons"));
        for add_on in &item.add_ons {
            println!("  {:<20} +{}", add_on.name, add_on.price);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_labels() {
        assert_eq!(prep_label(PrepTime::Ready), "Ready");
        assert_eq!(prep_label(PrepTime::Minutes(12)), "12 min");
        assert_eq!(prep_label(PrepTime::Unknown), "-");
    }
}
