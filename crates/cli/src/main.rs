//! `ledgerlens` — run the classification engines from the command line.

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ledgerlens_observability::LogFormat;
use ledgerlens_tools::{DirectionRequest, TenantScope, Toolbox};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogStyle {
    Json,
    Pretty,
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Json => LogFormat::Json,
            LogStyle::Pretty => LogFormat::Pretty,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ledgerlens", version, about = "Classify financial documents and check payment references")]
struct Cli {
    /// Log line format (written to stderr)
    #[arg(long = "log-format", value_enum, default_value_t = LogStyle::Pretty, env = "LEDGERLENS_LOG_FORMAT")]
    log_format: LogStyle,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Validate Belgian structured payment references (+++XXX/XXXX/XXXXX+++)
    Ogm {
        #[arg(required = true)]
        references: Vec<String>,
    },
    /// Resolve document direction from a JSON request ("-" reads stdin)
    Direction { path: String },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    ledgerlens_observability::tracing::init(cli.log_format.into());

    let toolbox = Toolbox::from_env(TenantScope::Any);
    match cli.command {
        Command::Ogm { references } => Ok(validate_references(&toolbox, &references)),
        Command::Direction { path } => resolve_direction(&toolbox, &path),
    }
}

fn validate_references(toolbox: &Toolbox, references: &[String]) -> ExitCode {
    let mut all_valid = true;
    for reference in references {
        let result = toolbox.ogm().validate(reference);
        all_valid &= result.is_valid();
        println!("{reference}: {}", result.diagnostic());
    }

    if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn resolve_direction(toolbox: &Toolbox, path: &str) -> anyhow::Result<ExitCode> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };

    let request: DirectionRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid direction request in {path}"))?;
    let request = request.normalized();
    tracing::info!(tenant_id = %request.tenant.id, kind = request.extraction.kind_name(), "resolving direction");

    let resolution = toolbox.resolve_direction(&request)?;
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(ExitCode::SUCCESS)
}
