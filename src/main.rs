use std::io::Write;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use v4l2_offsets::{render, ArchSource, LayoutFacts};

/// Log level for the generator
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

/// v4l2-offsets command line arguments
#[derive(Parser, Debug)]
#[command(name = "v4l2-offsets")]
#[command(
    version,
    about = "Print V4L2 structure offsets as a Go source file for the v4l2 package",
    long_about = None
)]
struct CliArgs {
    /// Go architecture for the build-selector line (default: this build's target)
    #[arg(short = 'a', long, value_name = "GOARCH")]
    arch: Option<String>,

    /// Ask the Go toolchain for the architecture (`go env GOHOSTARCH`)
    #[arg(long, conflicts_with = "arch")]
    go_env: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    init_logging(args.log_level, args.verbose);

    let source = match (args.arch, args.go_env) {
        (Some(arch), _) => ArchSource::Explicit(arch),
        (None, true) => ArchSource::go_env(),
        (None, false) => ArchSource::Host,
    };
    let arch = source.resolve();
    tracing::info!("Architecture tag: {}", arch);

    let facts = LayoutFacts::probe();
    tracing::debug!(
        "Pointer width {} bytes, {} offsets",
        facts.pointer_width,
        facts.offsets.len()
    );
    for fact in &facts.offsets {
        tracing::trace!(
            "{}.{} -> {} = {}",
            fact.structure,
            fact.field,
            fact.name,
            fact.offset
        );
    }

    let generated = render(&arch, &facts);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(generated.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Logs go to stderr; stdout carries the generated file.
fn init_logging(level: LogLevel, verbose_count: u8) {
    // Verbose count overrides log level
    let effective_level = match verbose_count {
        0 => level,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    let filter = match effective_level {
        LogLevel::Error => "v4l2_offsets=error",
        LogLevel::Warn => "v4l2_offsets=warn",
        LogLevel::Info => "v4l2_offsets=info",
        LogLevel::Debug => "v4l2_offsets=debug",
        LogLevel::Trace => "v4l2_offsets=trace",
    };

    // Environment variable takes highest priority
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        eprintln!("failed to initialize tracing: {}", err);
    }
}
