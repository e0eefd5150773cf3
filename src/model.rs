use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
    Info,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Fail => "fail",
            Self::Info => "info",
        }
    }

    /// Downgrade order used when sub-conditions combine: pass < warning < fail.
    pub fn severity(self) -> u8 {
        match self {
            Self::Pass | Self::Info => 0,
            Self::Warning => 1,
            Self::Fail => 2,
        }
    }

    pub fn is_scorable(self) -> bool {
        self != Self::Info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    Methodology,
    Excel,
    Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    None,
    Pass,
    Warning,
    Fail,
    Info,
    Note,
    Item,
    Todo,
    Chart,
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Pass => "✓ ",
            Self::Warning => "⚠ ",
            Self::Fail => "✗ ",
            Self::Info => "ℹ ",
            Self::Note => "📝 ",
            Self::Item => "  • ",
            Self::Todo => "  □ ",
            Self::Chart => "📊 ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightColor {
    Yellow,
    Blue,
}

/// One line of check output. Renderers decide how markers and highlights look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detail {
    Plain {
        marker: Marker,
        text: String,
    },
    Highlighted {
        marker: Marker,
        color: HighlightColor,
        text: String,
    },
}

impl Detail {
    pub fn plain(marker: Marker, text: impl Into<String>) -> Self {
        Self::Plain {
            marker,
            text: text.into(),
        }
    }

    pub fn highlighted(marker: Marker, color: HighlightColor, text: impl Into<String>) -> Self {
        Self::Highlighted {
            marker,
            color,
            text: text.into(),
        }
    }

    pub fn marker(&self) -> Marker {
        match self {
            Self::Plain { marker, .. } | Self::Highlighted { marker, .. } => *marker,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text, .. } | Self::Highlighted { text, .. } => text,
        }
    }

    pub fn highlight(&self) -> Option<HighlightColor> {
        match self {
            Self::Plain { .. } => None,
            Self::Highlighted { color, .. } => Some(*color),
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.marker().glyph(), self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub id: String,
    pub title: String,
    pub status: CheckStatus,
    pub details: Vec<Detail>,
    pub category: CheckCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SroiWarningLevel {
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SroiWarning {
    pub level: SroiWarningLevel,
    pub message: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SroiResult {
    pub calculated: bool,
    /// Ratio denominator: 5.23 reads as 1:5.23.
    pub value: Option<f64>,
    pub warnings: Vec<SroiWarning>,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationLevel {
    Info,
    Warning,
    Critical,
}

impl RecommendationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl From<SroiWarningLevel> for RecommendationLevel {
    fn from(level: SroiWarningLevel) -> Self {
        match level {
            SroiWarningLevel::Warning => Self::Warning,
            SroiWarningLevel::Critical => Self::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub level: RecommendationLevel,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "Needs Work")]
    NeedsWork,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl ScoreLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NeedsWork => "Needs Work",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub percentage: u32,
    pub label: ScoreLabel,
    pub passed: usize,
    pub failed: usize,
    pub scorable: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRun {
    pub as_of_year: i32,
    pub methodology: Vec<Check>,
    pub excel: Vec<Check>,
    pub alignment: Vec<Check>,
    pub sroi: SroiResult,
    pub score: OverallScore,
    pub recommendations: Vec<Recommendation>,
}

impl ValidationRun {
    pub fn all_checks(&self) -> impl Iterator<Item = &Check> {
        self.methodology
            .iter()
            .chain(self.excel.iter())
            .chain(self.alignment.iter())
    }
}

/// A decoded spreadsheet cell. JSON `null` and `""` both decode to `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "Value", into = "Value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    /// The cell as a spreadsheet would display it; integral numbers drop the fraction.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_number(*number),
            Self::Bool(flag) => flag.to_string(),
            Self::Empty => String::new(),
        }
    }
}

fn format_number(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        format!("{number}")
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => number.as_f64().map(Self::Number).unwrap_or_default(),
            Value::String(text) if text.is_empty() => Self::Empty,
            Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<CellValue> for Value {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Text(text) => Value::String(text),
            CellValue::Number(number)
                if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 =>
            {
                Value::from(number as i64)
            }
            CellValue::Number(number) => {
                serde_json::Number::from_f64(number).map_or(Value::Null, Value::Number)
            }
            CellValue::Bool(flag) => Value::Bool(flag),
            CellValue::Empty => Value::String(String::new()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Value::String(text.to_string()).into()
    }
}

pub type SheetGrid = Vec<Vec<CellValue>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SpreadsheetModel {
    #[serde(default)]
    pub sheet_names: Vec<String>,
    #[serde(default)]
    pub sheets: BTreeMap<String, SheetGrid>,
}

impl SpreadsheetModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: &str, rows: SheetGrid) -> Self {
        self.push_sheet(name, rows);
        self
    }

    pub fn push_sheet(&mut self, name: &str, rows: SheetGrid) {
        if !self.sheets.contains_key(name) {
            self.sheet_names.push(name.to_string());
        }
        self.sheets.insert(name.to_string(), rows);
    }

    pub fn is_loaded(&self) -> bool {
        !self.sheet_names.is_empty()
    }

    /// Sheets in declared order; a declared name without a grid yields an empty one.
    pub fn iter_sheets(&self) -> impl Iterator<Item = (&str, &[Vec<CellValue>])> {
        self.sheet_names.iter().map(|name| {
            let rows = self
                .sheets
                .get(name)
                .map(|grid| grid.as_slice())
                .unwrap_or(&[]);
            (name.as_str(), rows)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceHash {
    pub role: String,
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub tool_version: String,
    pub methodology_path: String,
    pub model_path: Option<String>,
    pub source_hashes: Vec<SourceHash>,
    pub run: ValidationRun,
}

/// Builds a row of cells from string literals; empty strings become `Empty`.
#[cfg(test)]
pub fn text_row(cells: &[&str]) -> Vec<CellValue> {
    cells.iter().map(|cell| CellValue::from(*cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_decodes_null_and_empty_string_as_empty() {
        let cells: Vec<CellValue> =
            serde_json::from_str(r#"[null, "", "SROI", 5.5, 150, true]"#).expect("cells decode");
        assert_eq!(
            cells,
            vec![
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Text("SROI".to_string()),
                CellValue::Number(5.5),
                CellValue::Number(150.0),
                CellValue::Bool(true),
            ]
        );
    }

    #[test]
    fn integral_numbers_display_and_serialize_without_fraction() {
        assert_eq!(CellValue::Number(150.0).display_text(), "150");
        assert_eq!(CellValue::Number(6.4).display_text(), "6.4");
        let encoded = serde_json::to_string(&vec![CellValue::Number(2024.0), CellValue::Empty])
            .expect("cells encode");
        assert_eq!(encoded, r#"[2024,""]"#);
    }

    #[test]
    fn iter_sheets_follows_declared_order_and_tolerates_missing_grids() {
        let raw = r#"{"sheet_names": ["Zeta", "Alpha", "Ghost"],
                      "sheets": {"Alpha": [["a"]], "Zeta": [["z"]]}}"#;
        let model: SpreadsheetModel = serde_json::from_str(raw).expect("model decodes");
        let names = model
            .iter_sheets()
            .map(|(name, rows)| (name, rows.len()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec![("Zeta", 1), ("Alpha", 1), ("Ghost", 0)]);
    }

    #[test]
    fn detail_display_prefixes_marker_glyph() {
        let detail = Detail::highlighted(Marker::Note, HighlightColor::Blue, "UK data");
        assert_eq!(detail.to_string(), "📝 UK data");
        assert_eq!(detail.highlight(), Some(HighlightColor::Blue));
        assert_eq!(Detail::plain(Marker::None, "").to_string(), "");
    }
}
