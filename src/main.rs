use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use familytree_user::{
    config::AppConfig,
    telemetry,
    user::validation::{normalize, validate},
    PublicUser, UserRecord, ValidationRules,
};
use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::{error, info, instrument, warn};

#[derive(Debug, Parser)]
#[command(name = "user-check", about = "Validate family-tree user records read from stdin")]
struct Cli {
    #[arg(long, help = "Validate records as given, without normalizing text fields")]
    raw: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    index: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<PublicUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Accepts a single record object or an array of them.
fn decode_records(input: &str) -> anyhow::Result<Vec<UserRecord>> {
    let value: serde_json::Value = serde_json::from_str(input).context("parse stdin as json")?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| serde_json::from_value(v).with_context(|| format!("decode record {i}")))
        .collect()
}

#[instrument(skip(records, rules), fields(count = records.len()))]
fn check_records(records: Vec<UserRecord>, rules: &ValidationRules, today: Date, raw: bool) -> Vec<Report> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, mut user)| {
            if !raw {
                normalize(&mut user);
            }
            match validate(&user, rules, today) {
                Ok(()) => Report {
                    index,
                    valid: true,
                    user: Some(user.public_view()),
                    error: None,
                },
                Err(e) => {
                    warn!(index, user_id = user.id, error = %e, "invalid user record");
                    Report {
                        index,
                        valid: false,
                        user: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

fn run(config: &AppConfig, raw: bool, mut input: impl Read, mut out: impl Write) -> anyhow::Result<bool> {
    let mut buf = String::new();
    input.read_to_string(&mut buf).context("read stdin")?;

    let records = decode_records(&buf)?;
    let today = OffsetDateTime::now_utc().date();
    let reports = check_records(records, &config.validation, today, raw);

    for report in &reports {
        let line = serde_json::to_string(report).context("encode report")?;
        writeln!(out, "{line}").context("write stdout")?;
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    info!(total = reports.len(), invalid, "user records checked");
    Ok(invalid == 0)
}

/// 0 when every record is valid, 1 when any is invalid, 2 on decode or I/O failure.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            error!("user-check failed: {e:#}");
            2
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init(&config.log);

    let result = run(&config, cli.raw, io::stdin().lock(), io::stdout().lock());
    ExitCode::from(exit_status(&result))
}
