//! Naked Pineapple cart CLI.
//!
//! Drives a [`CartStore`] over a JSON file, standing in for the storefront's
//! cart views. The signed-in shopper is remembered between runs.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (loads any saved cart for this shopper)
//! np-cart login alice
//!
//! # Add two units of a product, then change the quantity
//! np-cart add --id tee --price 19.99 --name "Pineapple Tee"
//! np-cart add --id tee --price 19.99 --name "Pineapple Tee"
//! np-cart set-quantity tee 5
//!
//! # Show the cart (add --json for machine-readable output)
//! np-cart show
//!
//! # Sign out (clears the cart and deletes every saved cart)
//! np-cart logout
//! ```
//!
//! # Commands
//!
//! - `login`, `logout`, `whoami` - Manage the signed-in shopper
//! - `add`, `remove`, `set-quantity`, `clear` - Change the cart
//! - `show` - Print the cart
//! - `keys` - List keys in the backing store

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use naked_pineapple_cart::{CartConfig, CartError, CartStore, FileStore, RecordingNotifier};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "np-cart")]
#[command(author, version, about = "Naked Pineapple cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as a shopper
    Login {
        /// Shopper ID
        id: String,
    },
    /// Sign out, clearing every saved cart
    Logout,
    /// Show the signed-in shopper
    Whoami,
    /// Add one unit of a product
    Add {
        /// Product ID
        #[arg(long)]
        id: String,

        /// Unit price (e.g., 19.99)
        #[arg(long)]
        price: Decimal,

        /// Product name
        #[arg(long, default_value = "")]
        name: String,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: String,
    },
    /// Set a product's quantity (0 removes it)
    SetQuantity {
        /// Product ID
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every product
    Clear,
    /// Print the cart
    Show {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List keys in the backing store
    Keys,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CartConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            output::fatal(&CartError::from(e));
            std::process::exit(1);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to warnings only so command output stays readable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "naked_pineapple_cart=warn,naked_pineapple_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("Command failed: {e}");
        output::fatal(&e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &CartConfig) -> Result<(), CartError> {
    let mut kv = FileStore::open(&config.store_path)?;
    let session = commands::session::SessionIdentity::read(&kv);
    let notifier = RecordingNotifier::new();

    let next_session = {
        let mut store = CartStore::with_settings(&mut kv, &notifier, config.cart);
        store.sync_identity(&session);
        commands::execute(&mut store, command)?
    };

    if let Some(identity) = next_session {
        commands::session::write(&mut kv, &identity)?;
    }

    output::notifications(&notifier.take());
    Ok(())
}
