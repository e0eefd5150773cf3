use super::*;

pub const IMPACT_STEMS: [&str; 4] = ["outcome", "impact", "benefit", "effect"];
pub const VALUATION_STEMS: [&str; 4] = ["value", "cost", "price", "factor"];
pub const ALIGNMENT_MIN_RATIO: f64 = 0.3;

const TERMS_PER_SENTENCE: usize = 3;
const TERM_MIN_CHARS: usize = 5;
const MAX_TERMS: usize = 10;

const DATA_ALIGNMENT_LINES: [(Marker, &str); 4] = [
    (Marker::Note, "Manual review required:"),
    (
        Marker::Item,
        "Compare data input fields with methodology's described approach",
    ),
    (Marker::Item, "Verify all mentioned metrics are captured in the model"),
    (
        Marker::Item,
        "Check that valuation factors match methodology description",
    ),
];

/// Candidate terms from sentences mentioning any stem, first-seen order, at most ten.
pub fn extract_key_terms(text: &str, stems: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for sentence in text.split(['.', '!', '?']) {
        for stem in stems {
            if !sentence.contains(stem) {
                continue;
            }
            let words = sentence
                .split_whitespace()
                .filter(|word| word.chars().count() >= TERM_MIN_CHARS)
                .take(TERMS_PER_SENTENCE);
            for word in words {
                if seen.insert(word) {
                    terms.push(word.to_string());
                }
            }
        }
    }

    terms.truncate(MAX_TERMS);
    terms
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentScore {
    pub matched: usize,
    pub total: usize,
}

impl AlignmentScore {
    pub fn is_weak(self) -> bool {
        self.total > 0 && (self.matched as f64 / self.total as f64) < ALIGNMENT_MIN_RATIO
    }
}

pub fn alignment_score(terms: &[String], model: &SpreadsheetModel) -> AlignmentScore {
    let matched = terms
        .iter()
        .filter(|term| sheet_names_contain(model, term) || cells_contain(model, term))
        .count();
    AlignmentScore {
        matched,
        total: terms.len(),
    }
}

pub fn alignment_checks(methodology_text: &str, model: &SpreadsheetModel) -> Vec<Check> {
    if !model.is_loaded() {
        let mut builder = CheckBuilder::new(
            "A-001",
            "Methodology-Model Consistency",
            CheckCategory::Alignment,
        );
        builder.worsen(CheckStatus::Fail);
        builder.line(
            Marker::Fail,
            "No Excel model loaded; methodology-model alignment not assessed",
        );
        return vec![builder.build()];
    }

    vec![
        consistency_check(methodology_text, model),
        data_alignment_check(),
    ]
}

fn consistency_check(methodology_text: &str, model: &SpreadsheetModel) -> Check {
    let mut builder = CheckBuilder::new(
        "A-001",
        "Methodology-Model Consistency",
        CheckCategory::Alignment,
    );
    let content = methodology_text.to_lowercase();
    let impact_terms = extract_key_terms(&content, &IMPACT_STEMS);
    let valuation_terms = extract_key_terms(&content, &VALUATION_STEMS);

    if !impact_terms.is_empty() {
        builder.line(
            Marker::Pass,
            format!(
                "Impact terms identified in methodology: {} key concepts",
                impact_terms.len()
            ),
        );
    }
    if !valuation_terms.is_empty() {
        builder.line(
            Marker::Info,
            format!(
                "Valuation terms identified in methodology: {} key concepts",
                valuation_terms.len()
            ),
        );
    }

    let score = alignment_score(&impact_terms, model);
    debug!(matched = score.matched, total = score.total, "terminology alignment scored");

    if score.is_weak() {
        builder.worsen(CheckStatus::Warning);
        builder.line(
            Marker::Warning,
            "Limited alignment detected between methodology terminology and Excel model",
        );
        builder.detail(Detail::highlighted(
            Marker::None,
            HighlightColor::Yellow,
            "Review that data inputs match the valuation approach described in methodology",
        ));
    } else {
        builder.line(Marker::Pass, "Terminology alignment appears reasonable");
    }

    builder.build()
}

fn data_alignment_check() -> Check {
    let mut builder = CheckBuilder::new(
        "A-002",
        "Data Inputs vs Valuation Approach",
        CheckCategory::Alignment,
    );
    builder.lines(&DATA_ALIGNMENT_LINES);
    builder.detail(Detail::highlighted(
        Marker::Item,
        HighlightColor::Yellow,
        "Highlight any discrepancies in yellow",
    ));
    builder.build()
}
