use super::*;

pub const DEFAULT_RECENT_YEAR_WINDOW: u32 = 4;
pub const AS_OF_YEAR_ENV: &str = "SROI_REVIEW_AS_OF_YEAR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    pub as_of_year: i32,
    pub recent_year_window: u32,
}

impl ValidationConfig {
    pub fn for_year(as_of_year: i32) -> Self {
        Self {
            as_of_year,
            recent_year_window: DEFAULT_RECENT_YEAR_WINDOW,
        }
    }
}

/// Flag first, then `SROI_REVIEW_AS_OF_YEAR`, then the current UTC year.
pub fn resolve_as_of_year(flag: Option<i32>, env_value: Option<&str>, current_year: i32) -> i32 {
    flag.or_else(|| env_value.and_then(|raw| raw.trim().parse::<i32>().ok()))
        .unwrap_or(current_year)
}

/// One self-contained validation pass over a methodology text and a decoded model.
pub fn run_validation(
    methodology_text: &str,
    model: &SpreadsheetModel,
    config: &ValidationConfig,
) -> ValidationRun {
    let methodology = methodology_checks(methodology_text, config);
    let excel = model_checks(model);
    let alignment = alignment_checks(methodology_text, model);

    let sroi = if model.is_loaded() {
        evaluate_sroi(SroiLocator::new().locate(model))
    } else {
        unassessed_sroi()
    };

    let all_checks = || methodology.iter().chain(excel.iter()).chain(alignment.iter());
    let score = overall_score(all_checks());
    let recommendations = build_recommendations(all_checks(), &sroi);

    info!(
        as_of_year = config.as_of_year,
        percentage = score.percentage,
        label = score.label.as_str(),
        failed = score.failed,
        sroi_detected = sroi.calculated,
        "validation run complete"
    );

    ValidationRun {
        as_of_year: config.as_of_year,
        methodology,
        excel,
        alignment,
        sroi,
        score,
        recommendations,
    }
}
