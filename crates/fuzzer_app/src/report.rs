//! Console presentation: banner, notices, discoveries and the final report.
//!
//! Everything here is formatting over values produced by the engine; nothing
//! feeds back into the run.

use std::path::Path;

use colored::{ColoredString, Colorize};
use fuzzer_core::{RunSummary, Severity, StatusExplanation, Warning};
use fuzzer_engine::{EventSink, FuzzEvent};

const BANNER: &str = r"
   ____  ___  _      _____
  / ___|/ _ \| |    |  ___|   _ ___________ _ __
 | |  _| | | | |    | |_ | | | |_  /_  / _ \ '__|
 | |_| | |_| | |___ |  _|| |_| |/ / / /  __/ |
  \____|\__\_\_____||_|   \__,_/___/___\___|_|
";

pub fn print_banner() {
    println!("{}", BANNER.cyan());
    println!("{}", format!("  GraphQL field fuzzer {}", env!("CARGO_PKG_VERSION")).bold());
    println!();
}

pub fn info(message: impl AsRef<str>) {
    println!("{} {}", "[*]".cyan(), message.as_ref());
}

pub fn failure(message: impl AsRef<str>) {
    println!("{} {}", "[X]".red(), message.as_ref());
}

pub fn cancelled() {
    println!("\n{} Scan stopped by user (Ctrl+C)", "[!]".yellow());
}

/// Prints engine events as they happen.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl EventSink for ConsoleReporter {
    fn emit(&self, event: FuzzEvent) {
        match event {
            FuzzEvent::BatchDispatched {
                index,
                total,
                words,
            } => {
                if self.verbose {
                    info(format!("Batch {}/{} ({} words)", index + 1, total, words));
                }
            }
            FuzzEvent::Warning(warning) => println!("{}", warning_line(&warning)),
            FuzzEvent::KeywordDiscovered(keyword) => println!("{}", keyword_line(&keyword)),
            FuzzEvent::Halted(explanation) => {
                println!("\n{}", halt_line(&explanation));
                println!("{} Operation stopped", "[!]".yellow());
            }
        }
    }
}

fn warning_line(warning: &Warning) -> String {
    match warning {
        Warning::Transport(cause) => format!("{} Request error: {}", "[X]".red(), cause),
        Warning::InvalidJson => format!(
            "{} Response was not valid JSON, skipping batch",
            "[!]".yellow()
        ),
    }
}

fn keyword_line(keyword: &str) -> String {
    format!("{} Found keyword: {}", "[+]".green(), keyword.magenta())
}

fn halt_line(explanation: &StatusExplanation) -> String {
    format!(
        "{} HTTP Error {}: {}{}",
        "[X]".red(),
        explanation.status,
        paint_severity(explanation.headline(), explanation.severity),
        explanation.trailer()
    )
}

fn paint_severity(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Critical => text.red(),
        Severity::Warning => text.yellow(),
        Severity::Notice => text.blue(),
    }
}

pub fn print_summary(summary: &RunSummary, output: Option<&Path>) {
    for line in summary_lines(summary, output) {
        println!("{line}");
    }
}

fn summary_lines(summary: &RunSummary, output: Option<&Path>) -> Vec<String> {
    let mut lines = vec![
        format!("\n{}", "=== Final Report ===".green().bold()),
        "-".repeat(40).cyan().to_string(),
        format!(
            "{} {}",
            "Total words processed:".yellow(),
            summary.words_processed
        ),
        format!(
            "{} {}",
            "Total requests sent:".yellow(),
            summary.requests_sent
        ),
        format!(
            "{} {}",
            "Total unique keywords extracted:".yellow(),
            summary.unique_keywords
        ),
    ];
    if let Some(status) = summary.halted_on {
        lines.push(format!("{} HTTP {}", "Stopped early on:".yellow(), status));
    }
    if let Some(path) = output {
        lines.push(format!("{} {}", "Results saved to:".yellow(), path.display()));
    }
    lines
}
