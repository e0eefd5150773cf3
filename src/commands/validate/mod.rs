use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::model::{
    CellValue, Check, CheckCategory, CheckStatus, Detail, HighlightColor, Marker, OverallScore,
    Recommendation, RecommendationLevel, ScoreLabel, SpreadsheetModel, SroiResult, SroiWarning,
    SroiWarningLevel, ValidationRun,
};

mod alignment;
mod engine;
mod methodology_checks;
mod model_checks;
mod rules;
mod run;
mod scoring;
mod sheet_scan;
mod sroi_value;
mod text_scan;
#[cfg(test)]
mod tests;

use self::alignment::*;
use self::methodology_checks::*;
use self::model_checks::*;
use self::rules::*;
use self::scoring::*;
use self::sheet_scan::*;
use self::sroi_value::*;
use self::text_scan::*;

pub use self::engine::{run_validation, ValidationConfig, DEFAULT_RECENT_YEAR_WINDOW};
pub use self::run::run;
