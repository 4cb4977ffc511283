//! Cafe CLI - menu, cart, branches, routes and reservations
//!
//! Terminal front end over the cafe site's core: browse and search the
//! menu, build a cart with promo and tip, find the nearest branch, fetch a
//! street route and book a table.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod app;
mod commands;

use app::App;
use commands::{cart, geo, menu, notes, reserve, route};

/// Command-line front end for the cafe site
#[derive(Parser)]
#[command(name = "cafe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a config file (defaults to .cafe.toml, cafe.toml or .config/cafe.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu {
        /// Category, e.g. "Food" or "Hot Coffee" (all categories if omitted)
        #[arg(short, long)]
        category: Option<String>,

        /// Search names, descriptions and tags
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Sort order: popular, price-asc, price-desc, time
        #[arg(short, long, default_value = "popular")]
        sort: String,

        /// Food sub-category, e.g. "Pizzas" (Food only)
        #[arg(long)]
        sub: Option<String>,

        /// Veg filter: all, veg, non-veg (Food only)
        #[arg(long, default_value = "all")]
        veg: String,

        /// Page to show (clamped to the available pages)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Items per page (defaults to menu.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show one menu item with its variants and add-ons
    Item {
        /// Menu item id
        id: u32,
    },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Distances to the cafe and its branches
    Distance {
        /// Your latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Your longitude
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// Delivery area as a GeoJSON polygon
    Radius {
        /// Number of polygon vertices
        #[arg(long, default_value_t = cafe_geo::DEFAULT_STEPS)]
        steps: usize,
    },

    /// Street route to a branch
    Route {
        /// Your latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Your longitude
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Travel mode: walking, cycling, driving
        #[arg(short, long, default_value = "driving")]
        mode: String,

        /// Branch id (nearest branch if omitted)
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Book a table
    Reserve {
        /// Guest name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: chrono::NaiveDate,

        /// Arrival time, HH:MM
        #[arg(long)]
        time: String,

        /// Party size
        #[arg(short, long, default_value = "2")]
        guests: u32,

        /// Special requests
        #[arg(long, default_value = "")]
        requests: String,
    },

    /// Flavor notes and pairing suggestions
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one of a menu item
    Add {
        /// Menu item id
        id: u32,

        /// Variant name
        #[arg(long)]
        variant: Option<String>,

        /// Add-on name (repeatable)
        #[arg(long = "add-on")]
        add_ons: Vec<String>,
    },

    /// Add one more of a line
    Inc {
        /// Line number as shown by `cart show`
        line: usize,
    },

    /// Take one away from a line
    Dec {
        /// Line number as shown by `cart show`
        line: usize,
    },

    /// Remove a line
    Remove {
        /// Line number as shown by `cart show`
        line: usize,
    },

    /// Empty the cart
    Clear,

    /// Show lines and totals
    Show {
        /// Promo code
        #[arg(long, default_value = "")]
        promo: String,

        /// Tip percentage
        #[arg(long, default_value = "0")]
        tip: u32,
    },

    /// Validate the order and hand it off
    Checkout {
        /// Customer name
        #[arg(long, default_value = "")]
        name: String,

        /// Contact phone
        #[arg(long, default_value = "")]
        phone: String,

        /// Contact email
        #[arg(long, default_value = "")]
        email: String,

        /// Pickup or dine-in
        #[arg(long, value_enum, default_value_t = cart::ServiceArg::Pickup)]
        service: cart::ServiceArg,

        /// Requested time
        #[arg(long, default_value = "ASAP")]
        time: String,

        /// Payment method
        #[arg(long, value_enum, default_value_t = cart::PaymentArg::Upi)]
        payment: cart::PaymentArg,

        /// Promo code
        #[arg(long, default_value = "")]
        promo: String,

        /// Tip percentage
        #[arg(long, default_value = "0")]
        tip: u32,
    },
}

#[derive(Subcommand)]
enum NotesAction {
    /// List notes and which are selected
    List,

    /// Select or unselect a note
    Toggle {
        /// Note name, e.g. "Nutty"
        note: String,
    },

    /// Unselect everything
    Clear,

    /// Pairings for the selected notes
    Suggest,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = cafe_telemetry::TelemetryConfig::from_verbosity(cli.verbose).with_json(cli.log_json);
    if let Err(e) = cafe_telemetry::init_with_config(telemetry) {
        eprintln!("{} {e}", "Warning:".yellow().bold());
    }

    let result = match App::load(cli.config.as_deref(), cli.format) {
        Ok(app) => dispatch(&app, cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{} {}", "Error:".red().bold(), app::describe(&e));
            ExitCode::from(app::exit_code(&e))
        }
    }
}

async fn dispatch(app: &App, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Menu {
            category,
            search,
            sort,
            sub,
            veg,
            page,
            page_size,
        } => menu::run(
            app,
            &menu::MenuArgs {
                category,
                search,
                sort,
                sub,
                veg,
                page,
                page_size,
            },
        ),

        Commands::Item { id } => menu::show_item(app, id),

        Commands::Cart { action } => match action {
            CartAction::Add { id, variant, add_ons } => cart::add(app, id, variant.as_deref(), &add_ons),
            CartAction::Inc { line } => cart::increment(app, line),
            CartAction::Dec { line } => cart::decrement(app, line),
            CartAction::Remove { line } => cart::remove(app, line),
            CartAction::Clear => cart::clear(app),
            CartAction::Show { promo, tip } => cart::show(app, &promo, tip),
            CartAction::Checkout {
                name,
                phone,
                email,
                service,
                time,
                payment,
                promo,
                tip,
            } => {
                let form = cafe_cart::OrderForm {
                    name,
                    phone,
                    email,
                    service: service.into(),
                    time,
                    payment: payment.into(),
                };
                cart::checkout(app, form, &promo, tip)
            }
        },

        Commands::Distance { lat, lng } => geo::distance(app, lat, lng),

        Commands::Radius { steps } => geo::radius(app, steps),

        Commands::Route { lat, lng, mode, branch } => route::run(app, lat, lng, &mode, branch.as_deref()).await,

        Commands::Reserve {
            name,
            email,
            phone,
            date,
            time,
            guests,
            requests,
        } => {
            let reservation = cafe_api_client::Reservation {
                name,
                email,
                phone,
                date: Some(date),
                time,
                guests,
                special_requests: requests,
            };
            reserve::run(app, &reservation).await
        }

        Commands::Notes { action } => match action {
            NotesAction::List => notes::list(app),
            NotesAction::Toggle { note } => notes::toggle(app, &note),
            NotesAction::Clear => notes::clear(app),
            NotesAction::Suggest => notes::suggest(app),
        },
    }
}
