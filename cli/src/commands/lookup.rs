use std::io::IsTerminal;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use macvend_common::config::Config;
use macvend_common::lookup::BatchResult;
use macvend_core::batch::BatchCoordinator;
use macvend_core::resolver::FanOutResolver;
use macvend_core::vendors::VendorSource;
use tracing::{Instrument, info, info_span};

use crate::mprint;
use crate::output::{self, OutputFormat};
use crate::terminal::{colors, print, spinner};

pub async fn lookup(
    addresses: Vec<String>,
    sources: Vec<Arc<dyn VendorSource>>,
    format: OutputFormat,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("looking up vendors", cfg.quiet);

    let resolver = FanOutResolver::new(sources);
    info!(
        "Querying {} sources for {} addresses",
        resolver.source_count(),
        addresses.len()
    );

    let progress = spinner::start_lookup_spinner(addresses.len(), cfg.quiet > 0);
    let (bar, total) = (progress.bar(), progress.total());
    let coordinator = BatchCoordinator::new(resolver, cfg)
        .on_progress(move |done| spinner::report_lookup_progress(&bar, done, total));

    let start_time: Instant = Instant::now();
    let batch: BatchResult = coordinator
        .resolve_batch(&addresses)
        .instrument(info_span!("lookup", addresses = addresses.len()))
        .await;
    progress.finish_and_clear();

    lookup_ends(&batch, format, start_time.elapsed(), cfg)
}

fn lookup_ends(
    batch: &BatchResult,
    format: OutputFormat,
    total_time: Duration,
    cfg: &Config,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table && batch.is_empty() {
        print::header("zero addresses resolved", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    let paint = std::io::stdout().is_terminal();
    let rendered = output::render(batch, format, paint)?;
    println!("{rendered}");

    if format == OutputFormat::Table {
        print_summary(batch, total_time, cfg);
    }
    Ok(())
}

fn print_summary(batch: &BatchResult, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let found: usize = batch.iter().filter(|(_, r)| r.found_count() > 0).count();
    let resolved: ColoredString = format!("{} addresses", batch.len()).bold().green();
    let identified: ColoredString = format!("{found} identified").bold().cyan();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString =
        &format!("Lookup Complete: {resolved} resolved, {identified} in {total_time}")
            .color(colors::TEXT_DEFAULT);

    mprint!();
    print::fat_separator();
    print::centerln(output);
}
