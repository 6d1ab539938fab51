//! # pix-brcode
//!
//! Command-line front end for pix-core.
//!
//! ## Usage
//! ```bash
//! export PIX_KEY=user@example.com
//! export PIX_MERCHANT_NAME="Maria Silva"
//! export PIX_MERCHANT_CITY=Fortaleza
//!
//! pix-brcode generate --amount 25.90 --description "Chá de bebê"
//! pix-brcode generate --amount 25.90 --json
//! pix-brcode decode "00020101021126..."
//! pix-brcode txid
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only the
//! result, so the payload can be piped into a QR renderer.

mod commands;
mod config;
mod error;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::GenerateArgs;
use crate::config::{txid_generator_from_lookup, AppConfig, Overrides};

#[derive(Parser)]
#[command(name = "pix-brcode")]
#[command(version, about = "Generate and inspect static Pix BR Code payloads")]
struct Cli {
    /// Pix key (overrides PIX_KEY)
    #[arg(long, global = true)]
    pix_key: Option<String>,

    /// Merchant name (overrides PIX_MERCHANT_NAME)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Merchant city (overrides PIX_MERCHANT_CITY)
    #[arg(long, global = true)]
    city: Option<String>,

    /// Transaction id prefix (overrides PIX_TXID_PREFIX)
    #[arg(long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a payload for the configured merchant
    Generate(GenerateArgs),

    /// Verify and list the fields of an existing payload
    Decode {
        payload: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print a fresh transaction id
    Txid,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let overrides = Overrides {
        pix_key: cli.pix_key,
        merchant_name: cli.name,
        merchant_city: cli.city,
        txid_prefix: cli.prefix,
    };

    let output = match cli.command {
        Command::Generate(args) => {
            let config = AppConfig::load(&overrides)?;
            info!(
                merchant = %config.merchant.merchant_name,
                city = %config.merchant.merchant_city,
                txid_prefix = config.txids.prefix(),
                "Configuration loaded"
            );
            commands::generate(&config, &args, Utc::now())?
        }
        Command::Decode { payload, json } => commands::decode_payload(&payload, json)?,
        Command::Txid => {
            let generator = txid_generator_from_lookup(|key| overrides.lookup(key))?;
            commands::txid(&generator, Utc::now())
        }
    };

    println!("{}", output);
    Ok(())
}
