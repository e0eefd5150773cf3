use super::*;

const IMPACT_PATHWAY_RULES: [KeywordRule; 2] = [
    KeywordRule {
        keywords: &["impact pathway", "theory of change", "impact chain", "causal pathway"],
        on_miss: CheckStatus::Warning,
        found: "Impact pathway is documented",
        missing: "Impact pathway not clearly identified. Look for terms like \"impact pathway\", \"theory of change\", or \"causal chain\"",
    },
    KeywordRule {
        keywords: &["diagram", "figure", "chart"],
        on_miss: CheckStatus::Warning,
        found: "Visual diagram referenced",
        missing: "No diagram or visual representation mentioned",
    },
];

const VALUATION_RULES: [KeywordRule; 2] = [
    KeywordRule {
        keywords: &["valuation", "monetis", "value factor", "financial proxy", "willingness to pay"],
        on_miss: CheckStatus::Fail,
        found: "Valuation approach described",
        missing: "Valuation approach not clearly described",
    },
    KeywordRule {
        keywords: &["not valued", "excluded", "out of scope"],
        on_miss: CheckStatus::Warning,
        found: "Scope of valuation clearly defined (what will and won't be valued)",
        missing: "Should clearly state what will and won't be valued/monetised and why",
    },
];

struct EvidenceGroup {
    keywords: &'static [&'static str],
    label: &'static str,
}

const EVIDENCE_GROUPS: [EvidenceGroup; 4] = [
    EvidenceGroup {
        keywords: &["study", "studies", "research", "paper"],
        label: "Research studies",
    },
    EvidenceGroup {
        keywords: &["academic", "journal", "peer-reviewed"],
        label: "Academic sources",
    },
    EvidenceGroup {
        keywords: &["government", "official", "ons", "statistics"],
        label: "Official sources",
    },
    EvidenceGroup {
        keywords: &["institution", "university", "institute"],
        label: "Reputable institutions",
    },
];

const EVIDENCE_GROUPS_MIN: usize = 2;

const UK_INDICATORS: [&str; 9] = [
    "uk",
    "united kingdom",
    "british",
    "england",
    "scotland",
    "wales",
    "northern ireland",
    "ons",
    "nhs",
];

pub fn methodology_checks(methodology_text: &str, config: &ValidationConfig) -> Vec<Check> {
    let content = methodology_text.to_lowercase();

    vec![
        impact_pathway_check(&content),
        research_evidence_check(&content, config),
        valuation_approach_check(&content),
        uk_data_check(&content),
    ]
}

fn impact_pathway_check(content: &str) -> Check {
    let mut builder = CheckBuilder::new(
        "M-001",
        "Impact Pathway Documentation",
        CheckCategory::Methodology,
    );
    apply_keyword_rules(&mut builder, content, &IMPACT_PATHWAY_RULES);
    builder.build()
}

fn research_evidence_check(content: &str, config: &ValidationConfig) -> Check {
    let mut builder = CheckBuilder::new(
        "M-002",
        "Research and Evidence Base",
        CheckCategory::Methodology,
    );

    let mut evidence_count = 0;
    for group in &EVIDENCE_GROUPS {
        if contains_any(content, group.keywords) {
            evidence_count += 1;
            builder.line(Marker::Pass, format!("{} referenced", group.label));
        }
    }

    if evidence_count < EVIDENCE_GROUPS_MIN {
        builder.worsen(CheckStatus::Warning);
        builder.line(
            Marker::Warning,
            "Limited evidence base detected. Ensure research from academic papers, official sources, or reputable institutions is included",
        );
    }

    builder.require(
        contains_recent_year(content, config.as_of_year, config.recent_year_window),
        CheckStatus::Warning,
        format!(
            "Recent data referenced (within last {} years)",
            config.recent_year_window.saturating_sub(1)
        ),
        "No recent dates found. Ensure data is as close to present date as possible",
    );

    builder.build()
}

fn valuation_approach_check(content: &str) -> Check {
    let mut builder =
        CheckBuilder::new("M-003", "Valuation Approach", CheckCategory::Methodology);
    apply_keyword_rules(&mut builder, content, &VALUATION_RULES);
    builder.build()
}

fn uk_data_check(content: &str) -> Check {
    let mut builder = CheckBuilder::informational(
        "M-004",
        "UK-Specific Data & Assumptions",
        CheckCategory::Methodology,
    );

    let mut seen = HashSet::new();
    let references = matching_keywords(content, &UK_INDICATORS)
        .into_iter()
        .map(str::to_uppercase)
        .filter(|reference| seen.insert(reference.clone()))
        .collect::<Vec<String>>();

    if references.is_empty() {
        builder.line(
            Marker::Info,
            "No UK-specific data identified. Verify if location-based data is needed",
        );
    } else {
        builder.line(
            Marker::Info,
            format!("UK-specific references found: {}", references.join(", ")),
        );
        builder.detail(Detail::highlighted(
            Marker::Note,
            HighlightColor::Blue,
            "Highlight these UK-specific assumptions in blue for data table extraction",
        ));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ValidationConfig {
        ValidationConfig::for_year(2025)
    }

    fn check<'a>(checks: &'a [Check], id: &str) -> &'a Check {
        checks
            .iter()
            .find(|check| check.id == id)
            .expect("check present")
    }

    #[test]
    fn impact_pathway_warns_on_each_missing_sub_condition() {
        let checks = methodology_checks("Our Theory of Change is shown in Figure 1.", &config());
        assert_eq!(check(&checks, "M-001").status, CheckStatus::Pass);

        let checks = methodology_checks("Our theory of change is described below.", &config());
        let pathway = check(&checks, "M-001");
        assert_eq!(pathway.status, CheckStatus::Warning);
        assert_eq!(pathway.details.len(), 2);
        assert_eq!(pathway.details[0].marker(), Marker::Pass);
        assert_eq!(pathway.details[1].marker(), Marker::Warning);
    }

    #[test]
    fn research_needs_two_groups_and_a_recent_year() {
        let text = "A university study published in 2023.";
        let checks = methodology_checks(text, &config());
        let research = check(&checks, "M-002");
        assert_eq!(research.status, CheckStatus::Pass);
        assert_eq!(research.details.len(), 3);

        let checks = methodology_checks("A study from 2019.", &config());
        let research = check(&checks, "M-002");
        assert_eq!(research.status, CheckStatus::Warning);
        assert_eq!(
            research
                .details
                .iter()
                .filter(|detail| detail.marker() == Marker::Warning)
                .count(),
            2
        );
    }

    #[test]
    fn valuation_fail_is_not_lifted_by_scope_warning() {
        let checks = methodology_checks("Nothing about money here.", &config());
        let valuation = check(&checks, "M-003");
        assert_eq!(valuation.status, CheckStatus::Fail);
        assert_eq!(valuation.details.len(), 2);
    }

    #[test]
    fn valuation_scope_statement_downgrades_to_warning_only() {
        let checks = methodology_checks("Outcomes are monetised via value factors.", &config());
        assert_eq!(check(&checks, "M-003").status, CheckStatus::Warning);

        let checks = methodology_checks(
            "Valuation uses financial proxies; carbon savings are excluded.",
            &config(),
        );
        assert_eq!(check(&checks, "M-003").status, CheckStatus::Pass);
    }

    #[test]
    fn uk_check_is_informational_and_deduplicates_uppercased_matches() {
        let checks = methodology_checks("Data from ONS and the NHS across the UK.", &config());
        let uk = check(&checks, "M-004");
        assert_eq!(uk.status, CheckStatus::Info);
        assert_eq!(
            uk.details[0].text(),
            "UK-specific references found: UK, ONS, NHS"
        );
        assert_eq!(uk.details[1].highlight(), Some(HighlightColor::Blue));

        let checks = methodology_checks("", &config());
        let uk = check(&checks, "M-004");
        assert_eq!(uk.status, CheckStatus::Info);
        assert_eq!(uk.details.len(), 1);
    }
}
