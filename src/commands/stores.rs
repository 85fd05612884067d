//! `bookbits stores` command - show which database files are in use
//!
//! Useful when more than one Apple Books installation matches a pattern.

use bookbits_core::error::{BookbitsError, Result};
use bookbits_core::locate::{self, StoreFile};
use chrono::Local;

use crate::cli::output::escape_quotes;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

struct StoreReport<'a> {
    name: &'static str,
    pattern: &'a str,
    candidates: Vec<StoreFile>,
    selected: Option<StoreFile>,
}

impl<'a> StoreReport<'a> {
    fn build(name: &'static str, pattern: &'a str) -> Result<Self> {
        let candidates = locate::candidates(pattern)?;
        let selected = match locate::resolve(pattern) {
            Ok(path) => candidates.iter().find(|c| c.path == path).cloned(),
            Err(BookbitsError::StoreNotFound { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(Self {
            name,
            pattern,
            candidates,
            selected,
        })
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "pattern": self.pattern,
            "selected": self.selected,
            "candidates": self.candidates,
        })
    }
}

fn modified_display(file: &StoreFile) -> String {
    file.modified
        .map(|m| {
            m.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let patterns = ctx.store_patterns(&config);

    let reports = [
        StoreReport::build("library", &patterns.library)?,
        StoreReport::build("annotations", &patterns.annotations)?,
    ];

    match ctx.cli.format {
        OutputFormat::Human => {
            for report in &reports {
                output_human(report);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "library": reports[0].to_json(),
                "annotations": reports[1].to_json(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            for report in &reports {
                output_records(report);
            }
        }
    }

    match reports.iter().find(|r| r.selected.is_none()) {
        Some(missing) => Err(BookbitsError::StoreNotFound {
            pattern: missing.pattern.to_string(),
        }),
        None => Ok(()),
    }
}

fn output_human(report: &StoreReport) {
    match &report.selected {
        Some(file) => println!(
            "{}: {} (modified {})",
            report.name,
            file.path.display(),
            modified_display(file)
        ),
        None => println!("{}: not found", report.name),
    }
    println!("  pattern: {}", report.pattern);

    for other in report
        .candidates
        .iter()
        .filter(|c| Some(&c.path) != report.selected.as_ref().map(|s| &s.path))
    {
        println!(
            "  also matched: {} (modified {})",
            other.path.display(),
            modified_display(other)
        );
    }
}

fn output_records(report: &StoreReport) {
    let selected = report
        .selected
        .as_ref()
        .map(|f| f.path.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "S store={} pattern=\"{}\" selected=\"{}\" matches={}",
        report.name,
        escape_quotes(report.pattern),
        escape_quotes(&selected),
        report.candidates.len()
    );
}
