mod loader;
mod reports;
mod ticker;
mod timeline;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use flashbid_core::{Catalog, Clock, Deadline, Listing, PageConfig, Storefront};
use loader::FileCatalogLoader;
use ticker::TokioClock;
use timeline::TimelineEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Validate listing data (fast, no timers)
    Check,
    /// Run every countdown on a virtual clock
    Simulate,
    /// Run every countdown in real time and print each change
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "flashbid-tester", version = "0.1.0")]
#[command(about = "QA tooling for Flashbid listing data and countdown timers")]
struct Args {
    /// Run mode: check (validate), simulate (virtual clock), or watch (real time)
    #[arg(long, value_enum, default_value_t = RunMode::Check)]
    mode: RunMode,

    /// Directory holding listings.json and page.json (defaults to the web crate's data)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// List all listings and exit
    #[arg(long)]
    list_listings: bool,

    /// Simulation start time (RFC 3339); defaults to now
    #[arg(long)]
    now: Option<String>,

    /// Number of ticks to run in simulate and watch modes
    #[arg(long, default_value_t = 5)]
    ticks: u32,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let root = args
        .data_dir
        .clone()
        .unwrap_or_else(FileCatalogLoader::default_root);
    log::debug!("loading listing data from {}", root.display());
    let storefront = Storefront::new(FileCatalogLoader::new(root));
    let (catalog, config) = storefront.load().with_context(|| {
        format!(
            "failed to load data from {}",
            storefront.loader().root().display()
        )
    })?;

    if maybe_list_listings(&args, &catalog)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console {
        announce_banner();
    }

    let start_time = Instant::now();
    let mut output_target = OutputTarget::new(args.output.clone())?;

    let failed = match args.mode {
        RunMode::Check => run_check(&args, &catalog, &mut output_target)?,
        RunMode::Simulate => {
            run_simulate(&args, &catalog, &config, &mut output_target)?;
            false
        }
        RunMode::Watch => {
            run_watch(&args, &catalog, &config, &mut output_target).await?;
            false
        }
    };

    if args.report == ReportFormat::Console {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_listings(args: &Args, catalog: &Catalog) -> Result<bool> {
    if !args.list_listings {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    reports::write_listing_index(output_target.writer(), catalog)?;
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛒 Flashbid Tester".bright_cyan().bold());
    println!("{}", "==================".cyan());
}

/// Returns whether any error-severity issue was found.
fn run_check(args: &Args, catalog: &Catalog, out: &mut OutputTarget) -> Result<bool> {
    let issues = catalog.validate();
    match args.report {
        ReportFormat::Json => reports::write_check_json(out.writer(), catalog, &issues)?,
        ReportFormat::Console => reports::write_check_console(out.writer(), catalog, &issues)?,
    }
    Ok(reports::count_errors(&issues) > 0)
}

fn resolve_start(now: Option<&str>) -> Result<i64> {
    let Some(raw) = now else {
        return Ok(TokioClock::system().now_ms());
    };
    match Deadline::parse(raw) {
        Deadline::At(ms) => Ok(ms),
        Deadline::Invalid => bail!("--now is not a valid timestamp: {raw}"),
    }
}

fn run_simulate(
    args: &Args,
    catalog: &Catalog,
    config: &PageConfig,
    out: &mut OutputTarget,
) -> Result<()> {
    let start_ms = resolve_start(args.now.as_deref())?;
    let settings = config.countdown_settings();
    let timelines = timeline::simulate(catalog, &settings, start_ms, args.ticks);
    match args.report {
        ReportFormat::Json => reports::write_timelines_json(out.writer(), &timelines),
        ReportFormat::Console => {
            reports::write_timelines_console(out.writer(), &timelines, args.verbose)
        }
    }
}

async fn run_watch(
    args: &Args,
    catalog: &Catalog,
    config: &PageConfig,
    out: &mut OutputTarget,
) -> Result<()> {
    if args.now.is_some() {
        log::warn!("--now is ignored in watch mode");
    }
    let settings = config.countdown_settings();
    let live = args.report == ReportFormat::Console;
    let on_entry: Rc<dyn Fn(&Listing, &TimelineEntry)> =
        Rc::new(move |listing: &Listing, entry: &TimelineEntry| {
            if live {
                println!("{}", reports::format_live_entry(listing, entry));
            }
        });
    let timelines = tokio::task::LocalSet::new()
        .run_until(timeline::watch(catalog, &settings, args.ticks, on_entry))
        .await;
    match args.report {
        ReportFormat::Json => reports::write_timelines_json(out.writer(), &timelines),
        ReportFormat::Console => {
            writeln!(out)?;
            reports::write_timelines_console(out.writer(), &timelines, args.verbose)
        }
    }
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: RunMode::Check,
            data_dir: None,
            list_listings: false,
            now: None,
            ticks: 5,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
        }
    }

    #[test]
    fn parses_cli_flags() {
        let args = Args::parse_from([
            "flashbid-tester",
            "--mode",
            "simulate",
            "--report",
            "json",
            "--ticks",
            "3",
            "--now",
            "2027-01-01T00:00:00Z",
        ]);
        assert_eq!(args.mode, RunMode::Simulate);
        assert_eq!(args.report, ReportFormat::Json);
        assert_eq!(args.ticks, 3);
        assert_eq!(args.now.as_deref(), Some("2027-01-01T00:00:00Z"));
    }

    #[test]
    fn resolve_start_rejects_garbage() {
        assert!(resolve_start(Some("not a time")).is_err());
        assert_eq!(
            resolve_start(Some("1970-01-01T00:00:01Z")).expect("valid time"),
            1_000
        );
    }

    #[test]
    fn check_writes_json_to_file() {
        let path = std::env::temp_dir().join(format!(
            "flashbid-check-{}.json",
            std::process::id()
        ));
        let mut args = base_args();
        args.output = Some(path.clone());
        let catalog = Catalog::from_json(
            r#"[{"id":1,"tag":"a","name":"A","price":-1,"hasOnSale":true,"flashDealEndsIn":"2030-01-01"}]"#,
        )
        .expect("catalog parses");
        let mut out = OutputTarget::new(args.output.clone()).expect("file opens");
        let failed = run_check(&args, &catalog, &mut out).expect("check runs");
        out.flush_inner().expect("flush");
        assert!(failed);

        let written = std::fs::read_to_string(&path).expect("report written");
        let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(value["issues"][0]["kind"], "invalid_price");
        let _ = std::fs::remove_file(path);
    }
}
