use super::*;

pub const SROI_CRITICAL_MAX: f64 = 12.0;
pub const SROI_WARNING_MAX: f64 = 8.0;

const SCORE_NEEDS_WORK_BELOW: u32 = 60;
const SCORE_GOOD_BELOW: u32 = 80;
const SCORE_VERY_GOOD_BELOW: u32 = 95;

const CRITICAL_SROI_RECOMMENDATIONS: [&str; 4] = [
    "Review deflation factors (attribution, deadweight, displacement)",
    "Check for potential double-counting of impacts",
    "Verify value factors are reasonable and well-sourced",
    "Ensure assumptions are conservative and evidence-based",
];

const HIGH_SROI_RECOMMENDATIONS: [&str; 3] = [
    "Double-check deflation factors",
    "Verify no impacts are double-counted",
    "Review value factors for reasonableness",
];

const UNDETECTED_SROI_LINES: [(Marker, &str); 5] = [
    (Marker::Info, "SROI value not automatically detected"),
    (Marker::Note, "Manual testing recommended:"),
    (Marker::Item, "Input reasonable client data scenarios"),
    (Marker::Item, "Verify SROI recalculates correctly"),
    (Marker::Item, "Ensure SROI stays below 1:12 for social pathways"),
];

const SROI_TESTING_CHECKLIST: [(Marker, &str); 6] = [
    (Marker::None, ""),
    (Marker::Chart, "Testing Checklist:"),
    (Marker::Todo, "Test with different data input scenarios"),
    (Marker::Todo, "Verify calculations update dynamically"),
    (Marker::Todo, "Check edge cases (zero values, maximum values)"),
    (Marker::Todo, "Confirm initiative cost is properly factored in"),
];

const REVIEW_CHECKLIST: [&str; 7] = [
    "Download both files for offline review",
    "Highlight methodology concerns in yellow for follow-up",
    "Highlight UK-specific data in blue for data table extraction",
    "Test Excel model with various input scenarios",
    "Verify all assumptions are evidence-based and recent",
    "Check that results are client-ready and clearly presented",
    "Leave comments in files with any questions or concerns",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SroiTier {
    Reasonable,
    High,
    Critical,
}

pub fn classify_sroi(value: f64) -> SroiTier {
    if value > SROI_CRITICAL_MAX {
        SroiTier::Critical
    } else if value > SROI_WARNING_MAX {
        SroiTier::High
    } else {
        SroiTier::Reasonable
    }
}

pub fn evaluate_sroi(value: Option<f64>) -> SroiResult {
    let mut result = SroiResult::default();

    match value {
        Some(value) => {
            result.calculated = true;
            result.value = Some(value);
            result.details.push(Detail::plain(
                Marker::None,
                format!("SROI Value Detected: 1:{value:.2}"),
            ));

            match classify_sroi(value) {
                SroiTier::Critical => result.warnings.push(SroiWarning {
                    level: SroiWarningLevel::Critical,
                    message: format!(
                        "CRITICAL: SROI of 1:{value:.2} exceeds recommended maximum of 1:12 for social pathways"
                    ),
                    recommendations: to_strings(&CRITICAL_SROI_RECOMMENDATIONS),
                }),
                SroiTier::High => result.warnings.push(SroiWarning {
                    level: SroiWarningLevel::Warning,
                    message: format!(
                        "SROI of 1:{value:.2} is high. Verify assumptions are reasonable"
                    ),
                    recommendations: to_strings(&HIGH_SROI_RECOMMENDATIONS),
                }),
                SroiTier::Reasonable => result.details.push(Detail::plain(
                    Marker::Pass,
                    "SROI value is within reasonable range for social pathways",
                )),
            }
        }
        None => {
            warn!("sroi value not detected in model");
            push_lines(&mut result.details, &UNDETECTED_SROI_LINES);
        }
    }

    push_lines(&mut result.details, &SROI_TESTING_CHECKLIST);
    result
}

pub fn unassessed_sroi() -> SroiResult {
    let mut result = SroiResult::default();
    result.details.push(Detail::plain(
        Marker::Info,
        "SROI not assessed: no Excel model loaded",
    ));
    push_lines(&mut result.details, &SROI_TESTING_CHECKLIST);
    result
}

pub fn overall_score<'a>(checks: impl Iterator<Item = &'a Check>) -> OverallScore {
    let mut passed = 0;
    let mut failed = 0;
    let mut scorable = 0;
    for check in checks {
        if check.status.is_scorable() {
            scorable += 1;
        }
        match check.status {
            CheckStatus::Pass => passed += 1,
            CheckStatus::Fail => failed += 1,
            CheckStatus::Warning | CheckStatus::Info => {}
        }
    }

    let percentage = if scorable == 0 {
        0
    } else {
        (passed as f64 / scorable as f64 * 100.0).round() as u32
    };

    OverallScore {
        percentage,
        label: score_label(percentage, failed),
        passed,
        failed,
        scorable,
    }
}

pub fn score_label(percentage: u32, failed: usize) -> ScoreLabel {
    if failed > 0 || percentage < SCORE_NEEDS_WORK_BELOW {
        ScoreLabel::NeedsWork
    } else if percentage < SCORE_GOOD_BELOW {
        ScoreLabel::Good
    } else if percentage < SCORE_VERY_GOOD_BELOW {
        ScoreLabel::VeryGood
    } else {
        ScoreLabel::Excellent
    }
}

pub fn build_recommendations<'a>(
    checks: impl Iterator<Item = &'a Check> + Clone,
    sroi: &SroiResult,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let critical_items = checks
        .clone()
        .filter(|check| check.status == CheckStatus::Fail)
        .map(|check| {
            let details = check
                .details
                .iter()
                .map(Detail::to_string)
                .collect::<Vec<String>>();
            format!("{}: {}", check.title, details.join("; "))
        })
        .collect::<Vec<String>>();
    if !critical_items.is_empty() {
        recommendations.push(Recommendation {
            level: RecommendationLevel::Critical,
            title: "Critical Issues Requiring Attention".to_string(),
            items: critical_items,
        });
    }

    let warning_items = checks
        .filter(|check| check.status == CheckStatus::Warning)
        .map(|check| format!("{}: Review and verify", check.title))
        .collect::<Vec<String>>();
    if !warning_items.is_empty() {
        recommendations.push(Recommendation {
            level: RecommendationLevel::Warning,
            title: "Warnings & Suggested Improvements".to_string(),
            items: warning_items,
        });
    }

    for warning in &sroi.warnings {
        let mut items = vec![warning.message.clone()];
        items.extend(warning.recommendations.iter().cloned());
        recommendations.push(Recommendation {
            level: warning.level.into(),
            title: "SROI Validation".to_string(),
            items,
        });
    }

    recommendations.push(Recommendation {
        level: RecommendationLevel::Info,
        title: "Review Checklist".to_string(),
        items: to_strings(&REVIEW_CHECKLIST),
    });

    recommendations
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn push_lines(details: &mut Vec<Detail>, lines: &[(Marker, &str)]) {
    details.extend(
        lines
            .iter()
            .map(|(marker, text)| Detail::plain(*marker, *text)),
    );
}
