// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Offline checker for sequencer record files.

pub mod telemetry;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use sequencer_commit::codec::serde_utils::hex32;
use sequencer_commit::{Commitment, Committable, Header, L1BlockInfo, Record, Transaction};

#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    L1Block,
    Header,
    Transaction,
}

/// Outcome of decoding one record and recomputing its commitment.
#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub kind: RecordKind,
    /// Canonical JSON re-encoding of the decoded record.
    pub canonical: String,
    pub commitment: String,
    pub commitment_hex: String,
    pub field_element: bool,
    /// `None` when no expected commitment was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<bool>,
}

/// Accepts `HASH~...` tagged text or `0x` followed by 64 hex digits.
pub fn parse_expected(text: &str) -> Result<Commitment> {
    let text = text.trim();
    if text.starts_with("0x") {
        let bytes = hex32::parse(text).context("invalid hex commitment")?;
        return Ok(Commitment::from_bytes(bytes.0));
    }
    text.parse::<Commitment>()
        .context("invalid tagged commitment")
}

fn inspect_record<R: Record>(kind: RecordKind, text: &str) -> Result<Report> {
    let record = R::from_json(text).with_context(|| format!("failed to decode {kind:?} record"))?;
    tracing::debug!(?kind, "record decoded");

    let commitment = record.commit();
    tracing::info!(?kind, commitment = %commitment, "commitment computed");

    Ok(Report {
        kind,
        canonical: record.to_json()?,
        commitment: commitment.to_string(),
        commitment_hex: commitment.to_hex(),
        field_element: commitment.is_field_element(),
        matches: None,
    })
}

/// Decodes `text` as a record of `kind` and compares against `expected` if given.
pub fn inspect(kind: RecordKind, text: &str, expected: Option<&str>) -> Result<Report> {
    let mut report = match kind {
        RecordKind::L1Block => inspect_record::<L1BlockInfo>(kind, text)?,
        RecordKind::Header => inspect_record::<Header>(kind, text)?,
        RecordKind::Transaction => inspect_record::<Transaction>(kind, text)?,
    };

    if let Some(expected) = expected {
        let expected = parse_expected(expected)?;
        let matches = expected.to_string() == report.commitment;
        if !matches {
            tracing::warn!(expected = %expected, found = %report.commitment, "commitment mismatch");
        }
        report.matches = Some(matches);
    }

    Ok(report)
}

/// Reads a record file (`-` for stdin) and inspects it.
pub fn run(kind: RecordKind, path: &Path, expected: Option<&str>) -> Result<Report> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), bytes = text.len(), "input loaded");
    inspect(kind, &text, expected)
}
