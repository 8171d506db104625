// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Presentation of a finished ledger
//!
//! A sink receives the ordered entries and renders one row per entry with the
//! columns `Date, Direction, Asset, Amount, From, To, Hash, Link`. Dates are
//! UTC, formatted `%Y-%m-%d %H:%M:%S`.

use std::io::Write;

use chrono::DateTime;
use serde::Serialize;

use crate::{errors::SinkError, types::entry::LedgerEntry};

/// Column titles, in row order
pub const COLUMNS: [&str; 8] = [
    "Date", "Direction", "Asset", "Amount", "From", "To", "Hash", "Link",
];

/// Consumer of a finished ledger
pub trait LedgerSink {
    fn write_ledger(&mut self, entries: &[LedgerEntry]) -> Result<(), SinkError>;
}

/// One rendered ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    pub timestamp: i64,
    pub date: String,
    pub direction: String,
    pub asset: String,
    pub amount: String,
    pub from: String,
    pub to: String,
    pub hash: String,
    pub link: String,
}

impl LedgerRow {
    /// Cells in [`COLUMNS`] order
    pub fn cells(&self) -> [&str; 8] {
        [
            self.date.as_str(),
            self.direction.as_str(),
            self.asset.as_str(),
            self.amount.as_str(),
            self.from.as_str(),
            self.to.as_str(),
            self.hash.as_str(),
            self.link.as_str(),
        ]
    }
}

impl From<&LedgerEntry> for LedgerRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            timestamp: entry.timestamp(),
            date: format_timestamp(entry.timestamp()),
            direction: entry.direction().to_string(),
            asset: entry.asset().to_string(),
            amount: entry.amount().to_plain_string(),
            from: entry.from().to_string(),
            to: entry.to().to_string(),
            hash: entry.hash().to_string(),
            link: entry.link().to_string(),
        }
    }
}

/// Render seconds since epoch as a UTC date-time
///
/// Timestamps outside chrono's range fall back to the raw number.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Tab-separated output with a header line
pub struct TsvSink<W> {
    writer: W,
}

impl<W: Write> TsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LedgerSink for TsvSink<W> {
    fn write_ledger(&mut self, entries: &[LedgerEntry]) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", COLUMNS.join("\t"))?;
        for entry in entries {
            let row = LedgerRow::from(entry);
            let cells: Vec<String> = row.cells().iter().map(|cell| sanitize(cell)).collect();
            writeln!(self.writer, "{}", cells.join("\t"))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per line
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LedgerSink for JsonLinesSink<W> {
    fn write_ledger(&mut self, entries: &[LedgerEntry]) -> Result<(), SinkError> {
        for entry in entries {
            serde_json::to_writer(&mut self.writer, &LedgerRow::from(entry))?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

// Token symbols come from contract metadata and may contain anything
fn sanitize(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{normalize::Normalizer, types::raw::RawTokenTransfer};

    const ME: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// Collects rows in memory
    #[derive(Debug, Default)]
    struct MemorySink {
        rows: Vec<LedgerRow>,
    }

    impl LedgerSink for MemorySink {
        fn write_ledger(&mut self, entries: &[LedgerEntry]) -> Result<(), SinkError> {
            self.rows = entries.iter().map(LedgerRow::from).collect();
            Ok(())
        }
    }

    fn entries() -> Vec<LedgerEntry> {
        let normalizer = Normalizer::new("https://etherscan.io");
        let raw = RawTokenTransfer {
            time_stamp: "1700000000".into(),
            from: ME.into(),
            to: "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB".into(),
            value: "1500000".into(),
            hash: "0xabc".into(),
            token_symbol: "US\tDC".into(),
            token_decimal: "6".into(),
        };
        vec![normalizer.normalize_token(&raw, ME).unwrap()]
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20");
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_row_rendering() {
        let row = LedgerRow::from(&entries()[0]);
        assert_eq!(row.date, "2023-11-14 22:13:20");
        assert_eq!(row.direction, "OUT");
        assert_eq!(row.amount, "1.5");
        assert_eq!(row.to, "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
        assert_eq!(row.link, "https://etherscan.io/tx/0xabc");
    }

    #[test]
    fn test_tsv_sink() {
        let mut sink = TsvSink::new(Vec::new());
        sink.write_ledger(&entries()).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Date\tDirection\tAsset\tAmount\tFrom\tTo\tHash\tLink");
        let cells: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[2], "US DC");
        assert_eq!(cells[3], "1.5");
    }

    #[test]
    fn test_tiny_amounts_render_without_exponent() {
        let normalizer = Normalizer::new("https://etherscan.io");
        let raw = RawTokenTransfer {
            time_stamp: "1".into(),
            value: "1".into(),
            token_decimal: "18".into(),
            ..Default::default()
        };
        let entry = normalizer.normalize_token(&raw, ME).unwrap();
        assert_eq!(
            LedgerRow::from(&entry).amount,
            "0.000000000000000001"
        );
    }

    #[test]
    fn test_json_lines_sink() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.write_ledger(&entries()).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();

        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["asset"], "US\tDC");
        assert_eq!(value["timestamp"], 1_700_000_000);
        assert_eq!(value["amount"], "1.5");
    }

    #[test]
    fn test_sink_trait_object() {
        let mut sink = MemorySink::default();
        let dyn_sink: &mut dyn LedgerSink = &mut sink;
        dyn_sink.write_ledger(&entries()).unwrap();
        assert_eq!(sink.rows.len(), 1);
        assert_eq!(sink.rows[0].cells()[0], "2023-11-14 22:13:20");
    }
}
