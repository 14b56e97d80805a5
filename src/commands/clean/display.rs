//! Rendering for the cleanup flow.
//!
//! All report output goes through an explicit writer so nothing in the
//! engine depends on a process-wide console. The progress bar implements
//! `ProgressObserver` and draws to stderr, keeping the report stream clean.

use crate::executor::SIZE_NA;
use crate::measure;
use crate::orchestrator::{ProgressObserver, RunOutcome};
use crate::registry::{CleanupTarget, SafetyTier, TargetKind};
use colored::Colorize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Print the application banner and current available disk space.
pub fn print_header(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "🧹 Xcode Cleanup Tool".bold())?;
    writeln!(out, "Free up disk space by removing Xcode cache files")?;
    writeln!(out)?;
    print_available_space(out, "Available Disk Space")?;
    writeln!(out)
}

/// Print an available-space line with the given label.
pub fn print_available_space(out: &mut dyn Write, label: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("{}:", label).bold(),
        measure::available_space()
    )
}

/// Print the details table for all targets, measuring each directory.
pub fn print_details(out: &mut dyn Write, targets: &[CleanupTarget]) -> std::io::Result<()> {
    writeln!(out, "{}", details_table(targets))?;
    writeln!(out)
}

/// Build the details table: category, description, measured size, safety.
pub fn details_table(targets: &[CleanupTarget]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Description", "Size", "Safety"]);

    for target in targets {
        let size = match &target.kind {
            TargetKind::Directory { path } => measure::measure(path).display,
            TargetKind::Command { .. } => SIZE_NA.to_string(),
        };

        table.add_row(vec![
            Cell::new(&target.name),
            Cell::new(&target.description),
            Cell::new(size),
            safety_cell(target.safety),
        ]);
    }

    table
}

/// Print the aggregated results of one run.
pub fn print_results(
    out: &mut dyn Write,
    run: &RunOutcome,
    selected_total: usize,
) -> std::io::Result<()> {
    writeln!(out)?;
    if run.cancelled {
        writeln!(
            out,
            "{}",
            format!(
                "Run cancelled: {} of {} categories processed.",
                run.outcomes.len(),
                selected_total
            )
            .yellow()
        )?;
    } else {
        writeln!(out, "{}", "✨ Cleanup Completed!".bold())?;
    }
    writeln!(out)?;

    if !run.outcomes.is_empty() {
        writeln!(out, "{}", results_table(run))?;
        writeln!(out)?;
    }

    if run.failed_count() > 0 {
        writeln!(
            out,
            "{}",
            format!("{} target(s) reported errors.", run.failed_count()).red()
        )?;
        writeln!(out)?;
    }

    Ok(())
}

/// Build the results table: category, status glyph + message, size freed.
pub fn results_table(run: &RunOutcome) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Status", "Size Freed"]);

    for outcome in &run.outcomes {
        let (glyph, color) = if outcome.succeeded {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };

        table.add_row(vec![
            Cell::new(&outcome.target_name),
            Cell::new(format!("{} {}", glyph, outcome.message)).fg(color),
            Cell::new(&outcome.size_freed),
        ]);
    }

    table
}

fn safety_cell(tier: SafetyTier) -> Cell {
    let (glyph, color) = match tier {
        SafetyTier::Safe => ("✓", Color::Green),
        SafetyTier::Caution => ("⚠", Color::Yellow),
        SafetyTier::Advanced => ("⚡", Color::DarkYellow),
    };
    Cell::new(format!("{} {}", glyph, tier.label())).fg(color)
}

/// Progress bar observer for the interactive flow.
///
/// Draws to stderr via indicatif; absence of a terminal degrades to no
/// drawing at all, which is exactly the advisory contract the orchestrator
/// expects.
pub struct ProgressRenderer {
    bar: ProgressBar,
}

impl ProgressRenderer {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.dim} {msg:<40} [{bar:30}] {pos}/{len}")
                .expect("progress template is static and valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏✔")
                .progress_chars("━░"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Remove the bar from the terminal once the run is over.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for ProgressRenderer {
    fn target_started(&mut self, name: &str, _index: usize, _total: usize) {
        self.bar.set_message(format!("Cleaning: {}", name));
    }

    fn target_finished(&mut self, _outcome: &crate::executor::CleanupOutcome) {
        self.bar.inc(1);
    }
}
