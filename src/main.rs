//! # chatplot CLI
//!
//! Command-line interface for the chatplot library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatplot::ChatplotError;
use chatplot::chart::{Presenter, build_charts, validate_chat_name};
use chatplot::cli::Args;
use chatplot::parser::ChatLogParser;
use chatplot::stats::apply_filters;
use chatplot::stats::report::{ChatSummary, ReportFormat, write_report};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatplotError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level.as_deref());

    // The chat name becomes both a file name and a directory name.
    validate_chat_name(&args.chat)?;

    let input_path = args.input_path();
    let chart_config = args.chart_config();
    let filter_config = args.filter_config()?;

    let presenter = if args.no_save {
        Presenter::summary(chart_config)
    } else {
        Presenter::save(&args.output, &args.chat, chart_config)?
    };

    println!("📈 chatplot v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("💬 Chat:    {}", args.chat);
    println!("📂 Input:   {}", input_path.display());
    match presenter.output_dir() {
        Some(dir) => println!("💾 Output:  {} ({})", dir.display(), presenter.config().format),
        None => println!("🖥️  Output:  summary only (--no-save)"),
    }
    if let Some(after) = &args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(before) = &args.before {
        println!("📅 Before:  {}", before);
    }
    if let Some(from) = &args.from {
        println!("👤 From:    {}", from);
    }
    println!();

    println!("⏳ Parsing chat log...");
    let parse_start = Instant::now();
    let parser = ChatLogParser::with_config(args.parser_config());
    let messages = parser.parse(&input_path)?;
    let original_count = messages.len();
    println!(
        "   Found {} messages ({:.2}s)",
        original_count,
        parse_start.elapsed().as_secs_f64()
    );

    let messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    let charts = build_charts(&messages, args.per_sender);
    println!("🎨 Presenting {} charts...", charts.len());
    let written = presenter.present_all(&charts)?;

    if let Some(kind) = args.report {
        let format: ReportFormat = kind.into();
        println!("📝 Writing {} report...", format);
        let summary = ChatSummary::build(&args.chat, &messages);
        let files = write_report(&summary, &args.chat_dir(), format)?;
        for file in &files {
            println!("   {}", file.display());
        }
    }

    println!();
    if written.is_empty() {
        println!("✅ Done!");
    } else {
        println!("✅ Done! {} charts saved:", written.len());
        for path in &written {
            println!("   {}", path.display());
        }
    }

    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} messages", original_count);
    if filter_config.is_active() {
        println!("   Filtered:  {} messages", messages.len());
    }
    println!("   Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Installs the global tracing subscriber on stderr.
///
/// `--log-level` wins over `RUST_LOG`; without either only warnings are shown.
fn setup_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
