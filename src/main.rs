use anyhow::Result;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::{debug, info};

mod cli;
mod collector;
mod config;
mod formatter;
mod logging;
mod process;
mod snmp;

use cli::Args;
use collector::TableCollector;
use config::AppConfig;
use formatter::{JsonFormatter, Report, Status, TextFormatter};
use process::{HR_SW_RUN_ENTRY, ProcessTable, evaluate, expand_names, list};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => return usage_error(e),
    };

    logging::setup_tracing(args.verbose);

    let report = match run(&args).await {
        Ok(report) => report,
        Err(e) => Report::Failure(format!("{:#}", e)),
    };

    let output = if args.json {
        JsonFormatter::render(&report).unwrap_or_else(|e| {
            TextFormatter::render(&Report::Failure(format!("{:#}", e)))
        })
    } else {
        TextFormatter::render(&report)
    };
    println!("{}", output);

    exit_code(report.status())
}

/// Разбор аргументов → один walk → список или проверка
async fn run(args: &Args) -> Result<Report> {
    let config = AppConfig::from_args(args)?;

    let requested = expand_names(&args.processes, args.comma_separated);
    if !args.list && requested.is_empty() {
        anyhow::bail!("Не указаны процессы для проверки");
    }

    let raw = TableCollector::fetch_table(&config, HR_SW_RUN_ENTRY).await?;
    let table = ProcessTable::reconstruct(&raw);

    if args.list {
        info!(processes = table.len(), "режим списка");
        return Ok(Report::Listing(list(&table)));
    }

    let result = evaluate(&table, &requested, args.state);
    debug!(verdict = ?result.verdict, requested = requested.len(), "проверка завершена");

    Ok(Report::Evaluation {
        expected: args.state,
        result,
    })
}

/// --help и --version завершаются с 0, любые ошибки разбора это UNKNOWN
fn usage_error(e: clap::Error) -> ExitCode {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = e.print();
        return ExitCode::SUCCESS;
    }

    let _ = e.print();
    let headline = e
        .to_string()
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string();
    println!("{}", TextFormatter::render(&Report::Failure(headline)));

    exit_code(Status::Unknown)
}

fn exit_code(status: Status) -> ExitCode {
    ExitCode::from(status.exit_code() as u8)
}
