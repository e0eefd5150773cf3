use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::model::{SheetGrid, SpreadsheetModel};

const METHODOLOGY_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];
const MODEL_EXTENSIONS: [&str; 1] = ["json"];

#[derive(Debug, Deserialize)]
struct NamedSheet {
    name: String,
    #[serde(default)]
    rows: SheetGrid,
}

fn extension_lower(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

pub fn load_methodology(path: &Path) -> Result<String> {
    let extension = extension_lower(path);
    if !METHODOLOGY_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "unsupported methodology format '{}' for {}; decode it to plain text first",
            extension,
            path.display()
        );
    }

    let raw = fs::read(path)
        .with_context(|| format!("failed to read methodology: {}", path.display()))?;
    let text = String::from_utf8_lossy(&raw).into_owned();
    debug!(path = %path.display(), chars = text.chars().count(), "loaded methodology text");
    Ok(text)
}

pub fn load_model(path: &Path) -> Result<SpreadsheetModel> {
    let extension = extension_lower(path);
    if !MODEL_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "unsupported model format '{}' for {}; export the workbook to a json sheet grid first",
            extension,
            path.display()
        );
    }

    let raw =
        fs::read(path).with_context(|| format!("failed to read model: {}", path.display()))?;
    let model = parse_model_json(&raw)
        .with_context(|| format!("failed to parse model json: {}", path.display()))?;
    debug!(path = %path.display(), sheets = model.sheet_names.len(), "loaded spreadsheet model");
    Ok(model)
}

/// Accepts `{"sheet_names": [...], "sheets": {...}}` or `[{"name": ..., "rows": [...]}]`.
pub fn parse_model_json(raw: &[u8]) -> Result<SpreadsheetModel> {
    let value: Value = serde_json::from_slice(raw).context("model is not valid json")?;

    match value {
        Value::Array(_) => {
            let sheets: Vec<NamedSheet> =
                serde_json::from_value(value).context("invalid ordered sheet list")?;
            Ok(sheets
                .into_iter()
                .fold(SpreadsheetModel::new(), |model, sheet| {
                    model.with_sheet(&sheet.name, sheet.rows)
                }))
        }
        Value::Object(_) => {
            let mut model: SpreadsheetModel =
                serde_json::from_value(value).context("invalid sheet grid document")?;
            if model.sheet_names.is_empty() {
                model.sheet_names = model.sheets.keys().cloned().collect();
            }
            Ok(model)
        }
        _ => bail!("model json must be an object or an array of sheets"),
    }
}
