// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use seqcommit_verify::{run, telemetry, RecordKind};

#[derive(Parser, Debug)]
#[command(name = "seqcommit-verify", version)]
#[command(about = "Decode a sequencer record strictly and recompute its commitment", long_about = None)]
struct Args {
    /// Record type in the file
    #[arg(value_enum)]
    kind: RecordKind,

    /// JSON record file, or `-` for stdin
    path: PathBuf,

    /// Expected commitment (`HASH~...` or 0x hex); exits 1 on mismatch
    #[arg(long, short)]
    expect: Option<String>,
}

fn main() -> Result<ExitCode> {
    telemetry::init_tracing();
    let args = Args::parse();

    let report = run(args.kind, &args.path, args.expect.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.matches == Some(false) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
