use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    Contains(&'static str),
    ContainsWithout {
        needle: &'static str,
        excluded: &'static str,
    },
}

impl NamePattern {
    pub fn matches(self, lowered_name: &str) -> bool {
        match self {
            Self::Contains(needle) => lowered_name.contains(needle),
            Self::ContainsWithout { needle, excluded } => {
                lowered_name.contains(needle) && !lowered_name.contains(excluded)
            }
        }
    }
}

/// First sheet, in declared order, whose lowercased name satisfies any pattern.
pub fn find_sheet_by_name_pattern<'a>(
    sheet_names: &'a [String],
    patterns: &[NamePattern],
) -> Option<&'a str> {
    sheet_names
        .iter()
        .find(|name| {
            let lowered = name.to_lowercase();
            patterns.iter().any(|pattern| pattern.matches(&lowered))
        })
        .map(String::as_str)
}

/// Lowercased JSON form of one grid, the text that content searches run against.
pub fn sheet_search_text(rows: &[Vec<CellValue>]) -> String {
    serde_json::to_string(rows)
        .unwrap_or_default()
        .to_lowercase()
}

pub fn cells_contain(model: &SpreadsheetModel, term: &str) -> bool {
    let term = term.to_lowercase();
    model
        .iter_sheets()
        .any(|(_, rows)| sheet_search_text(rows).contains(&term))
}

pub fn sheet_names_contain(model: &SpreadsheetModel, term: &str) -> bool {
    model
        .sheet_names
        .join(" ")
        .to_lowercase()
        .contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::text_row;

    fn contains_patterns(needles: &[&'static str]) -> Vec<NamePattern> {
        needles.iter().copied().map(NamePattern::Contains).collect()
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn find_sheet_returns_first_declared_match() {
        let sheets = names(&["Cover", "Output Summary", "Results"]);
        let found = find_sheet_by_name_pattern(&sheets, &contains_patterns(&["result", "summary"]));
        assert_eq!(found, Some("Output Summary"));
        assert_eq!(
            find_sheet_by_name_pattern(&sheets, &contains_patterns(&["assumption"])),
            None
        );
    }

    #[test]
    fn contains_without_excludes_names_with_the_excluded_term() {
        let patterns = [
            NamePattern::Contains("input"),
            NamePattern::ContainsWithout {
                needle: "data",
                excluded: "output",
            },
        ];
        assert_eq!(
            find_sheet_by_name_pattern(&names(&["Data Output"]), &patterns),
            None
        );
        assert_eq!(
            find_sheet_by_name_pattern(&names(&["Data Output", "Raw Data"]), &patterns),
            Some("Raw Data")
        );
        assert_eq!(
            find_sheet_by_name_pattern(&names(&["Output Inputs"]), &patterns),
            Some("Output Inputs")
        );
    }

    #[test]
    fn cells_contain_searches_every_sheet_case_insensitively() {
        let model = SpreadsheetModel::new()
            .with_sheet("One", vec![text_row(&["Cost", ""])])
            .with_sheet("Two", vec![vec![CellValue::from("Wellbeing Uplift"), CellValue::Number(150.0)]]);
        assert!(cells_contain(&model, "wellbeing"));
        assert!(cells_contain(&model, "UPLIFT"));
        assert!(cells_contain(&model, "150"));
        assert!(!cells_contain(&model, "150.0"));
        assert!(!cells_contain(&model, "employment"));
    }

    #[test]
    fn sheet_names_contain_uses_joined_lowercase_names() {
        let model = SpreadsheetModel::new()
            .with_sheet("Employment Outcomes", Vec::new())
            .with_sheet("Costs", Vec::new());
        assert!(sheet_names_contain(&model, "outcomes"));
        assert!(sheet_names_contain(&model, "outcomes costs"));
        assert!(!sheet_names_contain(&model, "wellbeing"));
    }
}
