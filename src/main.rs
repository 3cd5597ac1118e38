use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use food_checkout::application::payment::PaymentProcessor;
use food_checkout::application::workflow::{OrderOutcome, OrderWorkflow};
use food_checkout::config::CheckoutConfig;
use food_checkout::domain::menu::Menu;
use food_checkout::domain::payment::PaymentStatus;
use food_checkout::domain::ports::RestaurantCatalog;
use food_checkout::domain::restaurant::RestaurantQuery;
use food_checkout::error::CheckoutError;
use food_checkout::infrastructure::in_memory::InMemoryOrderHistory;
use food_checkout::interfaces::csv::cart_reader::CartReader;
use food_checkout::interfaces::csv::menu_reader::MenuReader;
use food_checkout::interfaces::csv::order_writer::OrderWriter;
use food_checkout::interfaces::csv::restaurant_writer::RestaurantWriter;
use food_checkout::telemetry;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration (gateway behaviour, restaurant catalog, log level)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a cart against a menu and pay for it
    Place(PlaceArgs),
    /// List catalog restaurants matching the given filters
    Search(SearchArgs),
}

#[derive(Args)]
struct PlaceArgs {
    /// Cart CSV file (name,price,quantity)
    #[arg(long)]
    cart: PathBuf,

    /// Menu CSV file (name,price)
    #[arg(long, conflicts_with = "restaurant", required_unless_present = "restaurant")]
    menu: Option<PathBuf>,

    /// Use the menu of this catalog restaurant instead of a menu file
    #[arg(long)]
    restaurant: Option<String>,

    /// Payment method, e.g. credit_card
    #[arg(long)]
    method: String,

    #[arg(long)]
    card: String,

    #[arg(long)]
    cvv: String,

    /// Record a confirmed order under this id
    #[arg(long, requires = "date")]
    order_id: Option<String>,

    /// Order date (YYYY-MM-DD), required with --order-id
    #[arg(long, requires = "order_id")]
    date: Option<NaiveDate>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    cuisine: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    min_rating: Option<f64>,
}

#[derive(Serialize)]
struct OutcomeSummary {
    accepted: bool,
    status: Option<PaymentStatus>,
    message: String,
}

impl From<&OrderOutcome> for OutcomeSummary {
    fn from(outcome: &OrderOutcome) -> Self {
        Self {
            accepted: matches!(outcome, OrderOutcome::Processed(_)),
            status: outcome.payment_status(),
            message: outcome.message(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CheckoutConfig::load(path).into_diagnostic()?,
        None => CheckoutConfig::default(),
    };
    telemetry::init(&config.logging.level).into_diagnostic()?;

    match cli.command {
        Command::Place(args) => place(&config, args).await,
        Command::Search(args) => search(&config, args).await,
    }
}

async fn load_menu(config: &CheckoutConfig, args: &PlaceArgs) -> Result<Menu> {
    if let Some(path) = &args.menu {
        let file = File::open(path).into_diagnostic()?;
        return Ok(MenuReader::new(file).into_menu());
    }

    let name = args.restaurant.as_deref().unwrap_or_default();
    let catalog = config.catalog().await.into_diagnostic()?;
    let restaurant = catalog
        .find(name)
        .await
        .into_diagnostic()?
        .ok_or_else(|| CheckoutError::NotFound(format!("restaurant '{name}'")))
        .into_diagnostic()?;
    Ok(restaurant.menu)
}

async fn place(config: &CheckoutConfig, args: PlaceArgs) -> Result<()> {
    let file = File::open(&args.cart).into_diagnostic()?;
    let cart = CartReader::new(file).into_cart();
    let menu = load_menu(config, &args).await?;

    let mut processor = PaymentProcessor::new(Box::new(config.gateway()));
    if let Some(timeout) = config.gateway_timeout() {
        processor = processor.with_timeout(timeout);
    }
    let workflow = OrderWorkflow::new(processor, Box::new(InMemoryOrderHistory::new()));

    let outcome = workflow
        .place_order(&cart, &menu, &args.method, &args.card, &args.cvv)
        .await;
    info!(confirmed = outcome.is_confirmed(), "order placement finished");

    if args.json {
        let summary = serde_json::to_string(&OutcomeSummary::from(&outcome)).into_diagnostic()?;
        println!("{summary}");
    } else {
        println!("{}", outcome.message());
    }

    if let (Some(order_id), Some(date)) = (args.order_id, args.date)
        && let Some(record) = workflow
            .record_order(order_id, date, &cart, &outcome)
            .await
            .into_diagnostic()?
    {
        let stdout = io::stdout();
        let mut writer = OrderWriter::new(stdout.lock());
        writer.write_orders([&record]).into_diagnostic()?;
    }

    Ok(())
}

async fn search(config: &CheckoutConfig, args: SearchArgs) -> Result<()> {
    let query = RestaurantQuery {
        cuisine: args.cuisine,
        location: args.location,
        min_rating: args.min_rating,
    };
    let catalog = config.catalog().await.into_diagnostic()?;
    let restaurants = catalog.search(&query).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = RestaurantWriter::new(stdout.lock());
    writer.write_restaurants(&restaurants).into_diagnostic()?;

    Ok(())
}
