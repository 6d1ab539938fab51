//! Subcommand implementations.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::{debug, info, warn};

use pix_core::{decode, Money, PixCharge, TxidGenerator};

use crate::config::AppConfig;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Amount in reais, e.g. 25.90
    #[arg(long)]
    pub amount: Money,

    /// Note shown to the payer (sanitized, at most 40 characters)
    #[arg(long)]
    pub description: Option<String>,

    /// Use this transaction id instead of generating one
    #[arg(long)]
    pub txid: Option<String>,

    /// Print the charge as JSON instead of the bare payload
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// `generate`: validate → generate-id → assemble.
pub fn generate(
    config: &AppConfig,
    args: &GenerateArgs,
    now: DateTime<Utc>,
) -> Result<String, CliError> {
    let txid = match &args.txid {
        Some(txid) => txid.clone(),
        None => config.txids.generate_at(now),
    };
    debug!(%txid, "Transaction id ready");

    let payment = config
        .merchant
        .payment_config(args.amount, args.description.as_deref(), txid);

    let charge = PixCharge::from_config(payment).map_err(|e| {
        warn!(error = %e, "Payment configuration rejected");
        e
    })?;

    info!(
        txid = %charge.txid,
        amount = %charge.amount,
        payload_len = charge.payload.len(),
        "BR Code generated"
    );

    if args.json {
        Ok(serde_json::to_string_pretty(&charge)?)
    } else {
        Ok(charge.payload)
    }
}

/// `decode`: verify the checksum and list the fields.
pub fn decode_payload(payload: &str, json: bool) -> Result<String, CliError> {
    let decoded = decode(payload.trim()).map_err(|e| {
        warn!(error = %e, "Payload rejected");
        e
    })?;

    if json {
        return Ok(serde_json::to_string_pretty(&decoded)?);
    }

    let mut lines = vec!["TAG  LEN  VALUE".to_string()];
    lines.extend(
        decoded
            .fields
            .iter()
            .map(|field| format!("{:<4} {:<4} {}", field.tag, field.len(), field.value)),
    );
    lines.push(String::new());
    lines.push(format!("pix key:     {}", decoded.pix_key));
    if let Some(description) = &decoded.description {
        lines.push(format!("description: {}", description));
    }
    let amount = decoded
        .amount
        .map(|a: Money| a.to_decimal_string())
        .unwrap_or_else(|| "(open)".to_string());
    lines.push(format!("amount:      {}", amount));
    lines.push(format!("merchant:    {}", decoded.merchant_name));
    lines.push(format!("city:        {}", decoded.merchant_city));
    lines.push(format!("txid:        {}", decoded.txid.as_deref().unwrap_or("-")));
    lines.push(format!("crc:         {} (ok)", decoded.crc));

    Ok(lines.join("\n"))
}

/// `txid`: print a fresh transaction id.
pub fn txid(generator: &TxidGenerator, now: DateTime<Utc>) -> String {
    generator.generate_at(now)
}
