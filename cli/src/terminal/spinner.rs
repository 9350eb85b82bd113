use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner currently on screen; log output is routed through it while set.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub struct SpinnerHandle {
    spinner: ProgressBar,
    total: usize,
}

impl SpinnerHandle {
    /// Cheap clone of the underlying bar, for progress callbacks.
    pub fn bar(&self) -> ProgressBar {
        self.spinner.clone()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finish_and_clear(self) {
        if let Ok(mut active) = ACTIVE.lock() {
            active.take();
        }
        self.spinner.finish_and_clear();
    }
}

/// Starts the batch spinner. A hidden bar is used when `hidden` is set.
pub fn start_lookup_spinner(total: usize, hidden: bool) -> SpinnerHandle {
    if hidden {
        return SpinnerHandle {
            spinner: ProgressBar::hidden(),
            total,
        };
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    report_lookup_progress(&pb, 0, total);

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }

    SpinnerHandle { spinner: pb, total }
}

pub fn report_lookup_progress(pb: &ProgressBar, done: usize, total: usize) {
    pb.set_message(format!(
        "Resolved {}/{} addresses...",
        done.to_string().green().bold(),
        total
    ));
}

/// Log sink that prints above an active spinner instead of through it.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active = ACTIVE.lock().ok().and_then(|guard| guard.clone());
        match active {
            Some(pb) if !pb.is_hidden() => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            _ => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
