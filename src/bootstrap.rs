// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, io, str::FromStr};

use dotenvy::dotenv;
use tracing::info;

use crate::{
    config::{constants::env, LedgerConfig},
    errors::{ConfigError, SinkError},
    explorer::ExplorerClient,
    normalize::Normalizer,
    pipeline::LedgerPipeline,
    sink::{JsonLinesSink, LedgerSink, TsvSink},
    types::entry::LedgerEntry,
};

/// How the ledger is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tsv,
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "tsv" => Ok(Self::Tsv),
            "json" | "jsonl" => Ok(Self::JsonLines),
            _ => Err(ConfigError::invalid_var(env::FORMAT, s, "expected tsv or json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tsv => write!(f, "tsv"),
            Self::JsonLines => write!(f, "json"),
        }
    }
}

/// Split an address list on commas and whitespace
///
/// Empty pieces are skipped; validation happens later in the pipeline.
pub fn parse_address_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write `entries` in `format`
pub fn write_ledger<W: io::Write>(
    format: OutputFormat,
    writer: W,
    entries: &[LedgerEntry],
) -> Result<(), SinkError> {
    match format {
        OutputFormat::Tsv => TsvSink::new(writer).write_ledger(entries),
        OutputFormat::JsonLines => JsonLinesSink::new(writer).write_ledger(entries),
    }
}

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = LedgerConfig::from_env()?;
    let addresses = parse_address_list(&dotenvy::var(env::ADDRESSES).unwrap_or_default());
    let format = dotenvy::var(env::FORMAT)
        .unwrap_or_default()
        .parse::<OutputFormat>()?;

    info!(
        chain = %config.chain,
        candidates = addresses.len(),
        %format,
        "Building ledger"
    );

    let client = ExplorerClient::new(&config)?;
    let pipeline = LedgerPipeline::new(client, Normalizer::new(&config.base_explorer_url));
    let ledger = pipeline.build(&addresses).await?;

    write_ledger(format, io::stdout().lock(), &ledger)?;

    Ok(())
}
