//! Check command implementation

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use canon_core::{Engine, FactsDocument};
use canon_csharp::{Fix, init_engine, propose_fixes};
use canon_rule_abi::Finding;
use std::fs;

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::{load_config, load_rule_config};
use crate::files::collect_facts_files;
use crate::output::{SerializableFinding, print_finding};

/// Findings for one facts document, reported against the C# source path.
#[derive(Debug)]
pub struct FileReport {
    pub source_path: String,
    pub findings: Vec<(Finding, Vec<Fix>)>,
}

/// Evaluate every facts file. Fixes are only computed when `suggest` is set.
pub fn check_files(engine: &Engine, files: &[Utf8PathBuf], suggest: bool) -> Result<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        let text = fs::read_to_string(path)?;
        let document: FactsDocument =
            serde_json::from_str(&text).with_context(|| format!("invalid facts file {path}"))?;
        let indexed = engine
            .evaluate_document_indexed(&document)
            .with_context(|| format!("cannot check {path}"))?;

        let findings = indexed
            .into_iter()
            .map(|(index, finding)| {
                let fixes = match document.declarations.get(index) {
                    Some(facts) if suggest => propose_fixes(&finding, facts),
                    _ => Vec::new(),
                };
                (finding, fixes)
            })
            .collect();

        reports.push(FileReport {
            source_path: document.path,
            findings,
        });
    }

    Ok(reports)
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        cfg.format.unwrap_or(OutputFormat::Human)
    };

    let engine = init_engine(&load_rule_config(args.config.as_ref())?)?;

    let files = collect_facts_files(&args.paths)?;
    if files.is_empty() {
        eprintln!("No facts files found");
        return Ok(());
    }

    let reports = check_files(&engine, &files, args.suggest)?;

    let mut exit_code = 0;
    let mut json_out: Vec<SerializableFinding> = Vec::new();
    for report in reports {
        for (finding, fixes) in report.findings {
            match format {
                OutputFormat::Human => print_finding(&report.source_path, &finding, &fixes),
                OutputFormat::Json => {
                    json_out.push(SerializableFinding::new(&report.source_path, &finding, fixes));
                }
            }
            exit_code = 1;
        }
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&json_out)?);
    }

    tracing::debug!("checked {} facts files", files.len());
    std::process::exit(exit_code);
}
