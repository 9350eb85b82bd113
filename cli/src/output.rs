//! # Result Presentation
//!
//! Renders a [`BatchResult`] as a terminal table, JSON or CSV. Rendering is
//! pure: the caller decides where the text goes.

use anyhow::Context;
use clap::ValueEnum;
use colored::*;
use macvend_common::lookup::BatchResult;
use serde_json::{Map, Value};

use crate::terminal::colors;
use crate::terminal::format::{self, Cell};

pub const CSV_HEADER: [&str; 3] = ["MAC", "Fuente", "Fabricante"];
const SOURCE_COLUMN: &str = "Fuente";
const VENDOR_COLUMN: &str = "Fabricante";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// `paint` only affects the table; JSON and CSV are always uncolored.
pub fn render(batch: &BatchResult, format: OutputFormat, paint: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(batch, paint)),
        OutputFormat::Json => render_json(batch),
        OutputFormat::Csv => render_csv(batch),
    }
}

pub fn render_table(batch: &BatchResult, paint: bool) -> String {
    let header = [
        Cell::colored(SOURCE_COLUMN, colors::HEADER),
        Cell::colored(VENDOR_COLUMN, colors::HEADER),
    ];

    let sections: Vec<String> = batch
        .iter()
        .map(|(address, result)| {
            let rows: Vec<Vec<Cell>> = result
                .outcomes
                .iter()
                .map(|outcome| {
                    vec![
                        Cell::plain(outcome.source()),
                        format::status_to_cell(outcome.status()),
                    ]
                })
                .collect();

            let title = if paint {
                address.color(colors::ACCENT).to_string()
            } else {
                address.to_string()
            };
            format!(
                "Resultados para la MAC: {}\n{}",
                title,
                format::grid(&header, &rows, paint)
            )
        })
        .collect();

    sections.join("\n\n")
}

/// `{ address: { source: vendor } }`, pretty-printed.
pub fn render_json(batch: &BatchResult) -> anyhow::Result<String> {
    let root: Map<String, Value> = batch
        .iter()
        .map(|(address, result)| {
            let by_source: Map<String, Value> = result
                .outcomes
                .iter()
                .map(|o| (o.source().to_string(), Value::from(o.status().label())))
                .collect();
            (address.clone(), Value::Object(by_source))
        })
        .collect();

    serde_json::to_string_pretty(&Value::Object(root)).context("serializing results to JSON")
}

/// Header row then one `MAC,Fuente,Fabricante` row per outcome.
pub fn render_csv(batch: &BatchResult) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (address, result) in batch.iter() {
        for outcome in &result.outcomes {
            writer.write_record([address.as_str(), outcome.source(), outcome.status().label()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV output")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
