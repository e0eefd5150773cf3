use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::engine::{AS_OF_YEAR_ENV, resolve_as_of_year};
use super::*;
use crate::cli::ValidateArgs;
use crate::commands::decode::{load_methodology, load_model};
use crate::commands::report::{write_highlights, write_text_report};
use crate::model::{SourceHash, ValidationReport};
use crate::util::{
    current_utc_year, ensure_directory, now_utc_string, sha256_file, utc_date_stamp,
    write_json_pretty,
};

const REPORT_MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct OutputPaths {
    report: Option<PathBuf>,
    highlights: Option<PathBuf>,
    json: Option<PathBuf>,
}

fn resolve_output_paths(args: &ValidateArgs, date_stamp: &str) -> OutputPaths {
    let in_out_dir = |explicit: &Option<PathBuf>, stem: &str, extension: &str| {
        explicit.clone().or_else(|| {
            args.out_dir
                .as_ref()
                .map(|dir| dir.join(format!("{stem}-{date_stamp}.{extension}")))
        })
    };

    OutputPaths {
        report: in_out_dir(&args.report_path, "validation-report", "txt"),
        highlights: in_out_dir(&args.highlights_path, "review-highlights", "txt"),
        json: in_out_dir(&args.json_path, "validation-report", "json"),
    }
}

fn write_to_file(
    path: &Path,
    render: impl FnOnce(&mut BufWriter<File>) -> Result<()>,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create file: {}", path.display()))?;
    let mut output = BufWriter::new(file);
    render(&mut output).with_context(|| format!("failed to write file: {}", path.display()))?;
    output
        .flush()
        .with_context(|| format!("failed to flush file: {}", path.display()))?;
    Ok(())
}

fn source_hash(role: &str, path: &Path) -> Result<SourceHash> {
    Ok(SourceHash {
        role: role.to_string(),
        path: path.display().to_string(),
        sha256: sha256_file(path)?,
    })
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let env_year = std::env::var(AS_OF_YEAR_ENV).ok();
    let config = ValidationConfig {
        recent_year_window: args.recent_year_window,
        ..ValidationConfig::for_year(resolve_as_of_year(
            args.as_of_year,
            env_year.as_deref(),
            current_utc_year(),
        ))
    };

    let methodology_text = load_methodology(&args.methodology)?;
    let model = match &args.model {
        Some(path) => load_model(path)?,
        None => {
            warn!("no model path given; validating methodology only");
            SpreadsheetModel::new()
        }
    };

    info!(
        methodology = %args.methodology.display(),
        sheets = model.sheet_names.len(),
        as_of_year = config.as_of_year,
        "validation requested"
    );

    let run = run_validation(&methodology_text, &model, &config);

    let mut source_hashes = vec![source_hash("methodology", &args.methodology)?];
    if let Some(path) = &args.model {
        source_hashes.push(source_hash("model", path)?);
    }

    let report = ValidationReport {
        manifest_version: REPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        methodology_path: args.methodology.display().to_string(),
        model_path: args.model.as_ref().map(|path| path.display().to_string()),
        source_hashes,
        run,
    };

    let outputs = resolve_output_paths(&args, &utc_date_stamp());

    if let Some(path) = &outputs.report {
        write_to_file(path, |output| write_text_report(output, &report))?;
        info!(path = %path.display(), "wrote text report");
    }
    if let Some(path) = &outputs.highlights {
        write_to_file(path, |output| write_highlights(output, &report.run))?;
        info!(path = %path.display(), "wrote review highlights");
    }
    if let Some(path) = &outputs.json {
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote json report");
    }

    let mut stdout = BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &report)
            .context("failed to serialize json report")?;
        writeln!(stdout)?;
    } else if outputs.report.is_none() {
        write_text_report(&mut stdout, &report)?;
    }
    stdout.flush()?;

    Ok(())
}
