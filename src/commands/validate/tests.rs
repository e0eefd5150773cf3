use super::*;
use crate::commands::sample::{sample_methodology, sample_model};
use crate::model::text_row;

const STRONG_METHODOLOGY: &str = "Our theory of change sets out the impact pathway, shown in \
    the diagram in Figure 1. A recent study from 2024 by the ONS supports the employment \
    outcomes. Valuation uses value factors; volunteering is excluded from scope.";

fn config() -> ValidationConfig {
    ValidationConfig::for_year(2025)
}

fn strong_model() -> SpreadsheetModel {
    SpreadsheetModel::new()
        .with_sheet("Results Summary", vec![text_row(&["SROI: 1:6.4"])])
        .with_sheet(
            "Assumptions",
            vec![
                text_row(&["Impact", "Source"]),
                text_row(&["Employment outcome uplift", "ONS study 2024"]),
                text_row(&["Theory of change reference", ""]),
            ],
        )
        .with_sheet(
            "Data Inputs",
            vec![vec![CellValue::from("Participants"), CellValue::Number(150.0)]],
        )
}

fn status_of(checks: &[Check], id: &str) -> CheckStatus {
    checks
        .iter()
        .find(|check| check.id == id)
        .map(|check| check.status)
        .unwrap_or_else(|| panic!("missing check {id}"))
}

fn marker_severity(marker: Marker) -> u8 {
    match marker {
        Marker::Fail => 2,
        Marker::Warning => 1,
        _ => 0,
    }
}

#[test]
fn well_documented_submission_scores_very_good_without_failures() {
    let run = run_validation(STRONG_METHODOLOGY, &strong_model(), &config());

    assert_eq!(run.sroi.value, Some(6.4));
    assert!(run.sroi.calculated);
    assert!(run.sroi.warnings.is_empty());
    assert_eq!(run.score.failed, 0);
    assert_eq!(status_of(&run.excel, "X-004"), CheckStatus::Warning);
    assert_eq!(status_of(&run.alignment, "A-001"), CheckStatus::Pass);
    assert_eq!((run.score.passed, run.score.scorable), (8, 9));
    assert_eq!(run.score.percentage, 89);
    assert!(matches!(
        run.score.label,
        ScoreLabel::VeryGood | ScoreLabel::Excellent
    ));
}

#[test]
fn unstructured_submission_needs_work() {
    let model = SpreadsheetModel::new()
        .with_sheet("Sheet1", vec![text_row(&["misc", "notes"])])
        .with_sheet("Sheet2", vec![text_row(&["more"])]);
    let run = run_validation("", &model, &config());

    assert_eq!(status_of(&run.methodology, "M-003"), CheckStatus::Fail);
    assert_eq!(status_of(&run.excel, "X-001"), CheckStatus::Fail);
    assert_eq!(status_of(&run.excel, "X-003"), CheckStatus::Fail);
    assert_eq!(run.score.label, ScoreLabel::NeedsWork);
    assert!(!run.sroi.calculated);
    assert!(
        run.recommendations
            .iter()
            .any(|recommendation| recommendation.level == RecommendationLevel::Critical)
    );
}

#[test]
fn missing_model_fails_model_checks_and_skips_sroi() {
    let run = run_validation(STRONG_METHODOLOGY, &SpreadsheetModel::new(), &config());

    assert_eq!(run.excel.len(), 1);
    assert_eq!(status_of(&run.excel, "X-000"), CheckStatus::Fail);
    assert_eq!(run.alignment.len(), 1);
    assert_eq!(status_of(&run.alignment, "A-001"), CheckStatus::Fail);
    assert!(!run.sroi.calculated);
    assert_eq!(run.sroi.value, None);
    assert!(run.sroi.details[0].text().starts_with("SROI not assessed"));
    assert_eq!(run.score.label, ScoreLabel::NeedsWork);
}

#[test]
fn repeated_runs_are_identical() {
    let model = strong_model();
    let first = run_validation(STRONG_METHODOLOGY, &model, &config());
    let second = run_validation(STRONG_METHODOLOGY, &model, &config());
    assert_eq!(first, second);
}

#[test]
fn status_is_never_better_than_its_worst_rule_line() {
    let inputs = [
        ("", SpreadsheetModel::new()),
        ("impact pathway without a picture", strong_model()),
        (STRONG_METHODOLOGY, SpreadsheetModel::new().with_sheet("Summary", Vec::new())),
        (sample_methodology(), sample_model()),
    ];

    for (text, model) in &inputs {
        let run = run_validation(text, model, &config());
        for check in run.all_checks().filter(|check| check.status.is_scorable()) {
            let worst = check
                .details
                .iter()
                .map(|detail| marker_severity(detail.marker()))
                .max()
                .unwrap_or(0);
            assert!(
                check.status.severity() >= worst,
                "{} reported {} under a worse detail line",
                check.id,
                check.status.as_str()
            );
        }
        for check in run.all_checks().filter(|check| !check.status.is_scorable()) {
            assert_eq!(check.status, CheckStatus::Info, "{} changed from info", check.id);
        }
    }
}

#[test]
fn wider_recent_year_window_changes_only_the_research_check() {
    let text = "impact pathway diagram. peer-reviewed study from 2019. valuation excluded.";
    let model = strong_model();
    let narrow = run_validation(text, &model, &config());
    let wide = run_validation(
        text,
        &model,
        &ValidationConfig {
            as_of_year: 2025,
            recent_year_window: 8,
        },
    );

    assert_eq!(status_of(&narrow.methodology, "M-002"), CheckStatus::Warning);
    assert_eq!(status_of(&wide.methodology, "M-002"), CheckStatus::Pass);
    assert_eq!(narrow.excel, wide.excel);
    assert_eq!(narrow.sroi, wide.sroi);
}

#[test]
fn bundled_sample_passes_every_methodology_and_model_check() {
    let run = run_validation(sample_methodology(), &sample_model(), &config());

    for check in run.methodology.iter().chain(run.excel.iter()) {
        assert_ne!(check.status, CheckStatus::Fail, "{} failed", check.id);
        assert_ne!(check.status, CheckStatus::Warning, "{} warned", check.id);
    }
    assert_eq!(run.sroi.value, Some(5.5));
    assert!(run.sroi.warnings.is_empty());
}
