use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use flashbid_core::{Catalog, CountdownPhase, Listing, Severity, ValidationIssue};
use serde::Serialize;

use crate::timeline::{Timeline, TimelineEntry};

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    listings: usize,
    errors: usize,
    warnings: usize,
    issues: &'a [ValidationIssue],
}

pub fn count_errors(issues: &[ValidationIssue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count()
}

pub fn write_listing_index(out: &mut dyn Write, catalog: &Catalog) -> Result<()> {
    writeln!(out, "Available listings:")?;
    for listing in catalog.iter() {
        writeln!(
            out,
            "  {:>4} {:8} - {}",
            listing.id,
            listing.kind().badge(),
            listing.name
        )?;
    }
    Ok(())
}

pub fn write_check_console(
    out: &mut dyn Write,
    catalog: &Catalog,
    issues: &[ValidationIssue],
) -> Result<()> {
    writeln!(out, "{}", "📋 Catalog Check".bright_cyan().bold())?;
    writeln!(out, "{}", "================".cyan())?;
    writeln!(out, "Listings: {}", catalog.len())?;

    let errors = count_errors(issues);
    let warnings = issues.len() - errors;
    writeln!(out, "Errors: {}", errors.to_string().red())?;
    writeln!(out, "Warnings: {}", warnings.to_string().yellow())?;
    writeln!(out)?;

    if issues.is_empty() {
        writeln!(out, "{}", "✅ No issues found".green())?;
        return Ok(());
    }

    for issue in issues {
        let status = match issue.severity {
            Severity::Error => "❌ ERROR".red(),
            Severity::Warning => "⚠️  WARN".yellow(),
        };
        let name = catalog
            .get(issue.listing_id)
            .map_or("<unknown>", |listing| listing.name.as_str());
        writeln!(
            out,
            "{status} [{}] {} - {}",
            issue.listing_id,
            name.bold(),
            issue.kind.describe()
        )?;
    }
    Ok(())
}

pub fn write_check_json(
    out: &mut dyn Write,
    catalog: &Catalog,
    issues: &[ValidationIssue],
) -> Result<()> {
    let errors = count_errors(issues);
    let report = CheckReport {
        listings: catalog.len(),
        errors,
        warnings: issues.len() - errors,
        issues,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn phase_label(phase: CountdownPhase) -> colored::ColoredString {
    match phase {
        CountdownPhase::Running => "RUNNING".green(),
        CountdownPhase::Expired => "EXPIRED".red(),
    }
}

pub fn write_timelines_console(
    out: &mut dyn Write,
    timelines: &[Timeline],
    verbose: bool,
) -> Result<()> {
    writeln!(out, "{}", "⏱️  Countdown Timelines".bright_yellow().bold())?;
    writeln!(out, "{}", "======================".yellow())?;

    for timeline in timelines {
        writeln!(
            out,
            "{} [{}] {} ({}) - {}",
            phase_label(timeline.final_phase),
            timeline.listing_id,
            timeline.name.bold(),
            timeline.kind.badge(),
            timeline.final_display
        )?;
        if !timeline.deadline_valid {
            writeln!(out, "   {}", "deadline missing or unparseable".yellow())?;
        }
        if verbose {
            for entry in &timeline.entries {
                writeln!(
                    out,
                    "   +{:>6}ms {} {:?}",
                    entry.elapsed_ms, entry.display, entry.phase
                )?;
            }
        }
    }
    Ok(())
}

pub fn write_timelines_json(out: &mut dyn Write, timelines: &[Timeline]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, timelines)?;
    writeln!(out)?;
    Ok(())
}

/// One live line for watch mode.
pub fn format_live_entry(listing: &Listing, entry: &TimelineEntry) -> String {
    format!(
        "[{}] {:24} {} {}",
        listing.id,
        listing.name,
        entry.display,
        phase_label(entry.phase)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashbid_core::ListingKind;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
            {"id":1,"tag":"a","name":"Dup","price":10,"hasOnSale":true,"flashDealEndsIn":"2030-01-01T00:00:00Z"},
            {"id":1,"tag":"b","name":"Dup again","price":10,"hasOnSale":false,"discount":5,"auctionEndsIn":"2030-01-01T00:00:00Z"}
        ]"#,
        )
        .expect("catalog parses")
    }

    fn render(write: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        write(&mut buffer).expect("report writes");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn console_check_lists_every_issue() {
        let catalog = catalog();
        let issues = catalog.validate();
        let text = render(|out| write_check_console(out, &catalog, &issues));
        assert!(text.contains("Listings: 2"));
        assert!(text.contains("listing id appears more than once"));
        assert!(text.contains("auction carries a discount"));
    }

    #[test]
    fn json_check_counts_severities() {
        let catalog = catalog();
        let issues = catalog.validate();
        let text = render(|out| write_check_json(out, &catalog, &issues));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["listings"], 2);
        assert_eq!(value["errors"], count_errors(&issues));
        assert!(value["warnings"].as_u64().unwrap_or_default() >= 1);
    }

    #[test]
    fn clean_catalog_reports_no_issues() {
        let catalog = Catalog::default();
        let text = render(|out| write_check_console(out, &catalog, &[]));
        assert!(text.contains("No issues found"));
    }

    #[test]
    fn timelines_show_entries_when_verbose() {
        let timelines = vec![Timeline {
            listing_id: 7,
            name: "Watch".into(),
            kind: ListingKind::Auction,
            deadline_valid: true,
            entries: vec![TimelineEntry {
                elapsed_ms: 1_000,
                display: "00:00:00:09".into(),
                phase: CountdownPhase::Running,
            }],
            final_phase: CountdownPhase::Running,
            final_display: "00:00:00:09".into(),
        }];
        let quiet = render(|out| write_timelines_console(out, &timelines, false));
        assert!(quiet.contains("[7] Watch (Auction) - 00:00:00:09"));
        assert!(!quiet.contains("+  1000ms"));
        let verbose = render(|out| write_timelines_console(out, &timelines, true));
        assert!(verbose.contains("+  1000ms 00:00:00:09 Running"));
    }
}
