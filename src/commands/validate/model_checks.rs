use super::*;

const SHEET_RULES: [SheetRule; 4] = [
    SheetRule {
        id: "X-001",
        title: "Results Tab",
        patterns: &[
            NamePattern::Contains("result"),
            NamePattern::Contains("output"),
            NamePattern::Contains("summary"),
        ],
        on_miss: CheckStatus::Fail,
        found_label: "Results tab found",
        missing: "No dedicated results/output tab found",
        notes_when_found: &[(
            Marker::Pass,
            "Results should be client-ready and clearly presented",
        )],
        notes_when_missing: &[],
    },
    SheetRule {
        id: "X-002",
        title: "Assumptions & Value Factors",
        patterns: &[
            NamePattern::Contains("assumption"),
            NamePattern::Contains("value factor"),
            NamePattern::Contains("parameters"),
        ],
        on_miss: CheckStatus::Warning,
        found_label: "Assumptions tab found",
        missing: "No dedicated assumptions/value factors tab identified",
        notes_when_found: &[],
        notes_when_missing: &[],
    },
    // `input`, or `data` without `output`.
    SheetRule {
        id: "X-003",
        title: "Data Inputs Tab",
        patterns: &[
            NamePattern::Contains("input"),
            NamePattern::ContainsWithout {
                needle: "data",
                excluded: "output",
            },
        ],
        on_miss: CheckStatus::Fail,
        found_label: "Data inputs tab found",
        missing: "No data inputs tab identified",
        notes_when_found: &[
            (
                Marker::Note,
                "Check that mandatory vs optional fields are clearly indicated",
            ),
            (Marker::Note, "Verify example data is included"),
            (
                Marker::Note,
                "Confirm initiative cost is included for SROI calculation",
            ),
        ],
        notes_when_missing: &[],
    },
    SheetRule {
        id: "X-004",
        title: "Location-Based Data Tables",
        patterns: &[
            NamePattern::Contains("location"),
            NamePattern::Contains("country"),
            NamePattern::Contains("region"),
            NamePattern::Contains("uk"),
            NamePattern::Contains("data table"),
        ],
        on_miss: CheckStatus::Warning,
        found_label: "Location-based data tab found",
        missing: "No location-based data table identified",
        notes_when_found: &[],
        notes_when_missing: &[(
            Marker::Info,
            "If using UK-specific data, ensure it's in an expandable format for other countries",
        )],
    },
];

const FORMULA_REVIEW_LINES: [(Marker, &str); 5] = [
    (Marker::Note, "Spot check results formulas to verify:"),
    (Marker::Item, "Correct data sources are referenced"),
    (Marker::Item, "Assumptions are properly included"),
    (Marker::Item, "No circular references"),
    (Marker::Item, "Calculations follow best practices"),
];

pub fn model_checks(model: &SpreadsheetModel) -> Vec<Check> {
    if !model.is_loaded() {
        warn!("no spreadsheet model loaded; model checks skipped");
        return vec![missing_model_check()];
    }

    let mut checks = SHEET_RULES
        .iter()
        .map(|rule| evaluate_sheet_rule(rule, &model.sheet_names))
        .collect::<Vec<Check>>();
    checks.push(structure_check(model));
    checks.push(formula_review_check());
    checks
}

fn missing_model_check() -> Check {
    let mut builder = CheckBuilder::new("X-000", "Excel File", CheckCategory::Excel);
    builder.worsen(CheckStatus::Fail);
    builder.line(Marker::Fail, "No Excel file loaded");
    builder.build()
}

fn structure_check(model: &SpreadsheetModel) -> Check {
    let mut builder =
        CheckBuilder::informational("X-005", "Overall Model Structure", CheckCategory::Excel);
    builder.line(
        Marker::Info,
        format!("Total sheets in model: {}", model.sheet_names.len()),
    );
    builder.line(
        Marker::Info,
        format!("Sheet names: {}", model.sheet_names.join(", ")),
    );
    builder.build()
}

fn formula_review_check() -> Check {
    let mut builder = CheckBuilder::informational(
        "X-006",
        "Formula & Calculation Review",
        CheckCategory::Excel,
    );
    builder.lines(&FORMULA_REVIEW_LINES);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(names: &[&str]) -> SpreadsheetModel {
        names
            .iter()
            .fold(SpreadsheetModel::new(), |model, name| model.with_sheet(name, Vec::new()))
    }

    fn statuses(checks: &[Check]) -> Vec<(&str, CheckStatus)> {
        checks
            .iter()
            .map(|check| (check.id.as_str(), check.status))
            .collect()
    }

    #[test]
    fn missing_model_yields_single_fail_check() {
        let checks = model_checks(&SpreadsheetModel::new());
        assert_eq!(statuses(&checks), vec![("X-000", CheckStatus::Fail)]);
        assert_eq!(checks[0].details[0].text(), "No Excel file loaded");
    }

    #[test]
    fn recognised_tabs_pass_and_report_matched_names() {
        let checks = model_checks(&model_with(&[
            "Results",
            "Assumptions",
            "Data Inputs",
            "UK Location Data",
        ]));
        assert_eq!(
            statuses(&checks),
            vec![
                ("X-001", CheckStatus::Pass),
                ("X-002", CheckStatus::Pass),
                ("X-003", CheckStatus::Pass),
                ("X-004", CheckStatus::Pass),
                ("X-005", CheckStatus::Info),
                ("X-006", CheckStatus::Info),
            ]
        );
        assert_eq!(checks[0].details[0].text(), "Results tab found: \"Results\"");
        assert_eq!(checks[2].details.len(), 4);
        assert_eq!(
            checks[4].details[1].text(),
            "Sheet names: Results, Assumptions, Data Inputs, UK Location Data"
        );
    }

    #[test]
    fn unrecognised_tabs_fail_or_warn_per_rule() {
        let checks = model_checks(&model_with(&["Sheet1", "Sheet2"]));
        assert_eq!(
            statuses(&checks)[..4],
            [
                ("X-001", CheckStatus::Fail),
                ("X-002", CheckStatus::Warning),
                ("X-003", CheckStatus::Fail),
                ("X-004", CheckStatus::Warning),
            ]
        );
        assert_eq!(checks[3].details.len(), 2);
    }

    #[test]
    fn data_inputs_rule_keeps_or_and_not_precedence() {
        let checks = model_checks(&model_with(&["Data Output"]));
        assert_eq!(checks[2].status, CheckStatus::Fail);
        // "Data Output" still counts as a results tab via "output".
        assert_eq!(checks[0].status, CheckStatus::Pass);

        let checks = model_checks(&model_with(&["Raw Data"]));
        assert_eq!(checks[2].status, CheckStatus::Pass);
        assert_eq!(checks[2].details[0].text(), "Data inputs tab found: \"Raw Data\"");
    }
}
