use super::*;

pub fn marker_for(status: CheckStatus) -> Marker {
    match status {
        CheckStatus::Pass => Marker::Pass,
        CheckStatus::Warning => Marker::Warning,
        CheckStatus::Fail => Marker::Fail,
        CheckStatus::Info => Marker::Info,
    }
}

/// Accumulates one check. Status starts at pass (or info) and can only get worse.
#[derive(Debug)]
pub struct CheckBuilder {
    id: &'static str,
    title: &'static str,
    category: CheckCategory,
    status: CheckStatus,
    details: Vec<Detail>,
}

impl CheckBuilder {
    pub fn new(id: &'static str, title: &'static str, category: CheckCategory) -> Self {
        Self {
            id,
            title,
            category,
            status: CheckStatus::Pass,
            details: Vec::new(),
        }
    }

    pub fn informational(id: &'static str, title: &'static str, category: CheckCategory) -> Self {
        Self {
            status: CheckStatus::Info,
            ..Self::new(id, title, category)
        }
    }

    pub fn worsen(&mut self, status: CheckStatus) {
        if self.status == CheckStatus::Info {
            return;
        }
        if status.severity() > self.status.severity() {
            self.status = status;
        }
    }

    pub fn detail(&mut self, detail: Detail) -> &mut Self {
        self.details.push(detail);
        self
    }

    pub fn line(&mut self, marker: Marker, text: impl Into<String>) -> &mut Self {
        self.detail(Detail::plain(marker, text))
    }

    pub fn lines(&mut self, lines: &[(Marker, &str)]) -> &mut Self {
        for (marker, text) in lines {
            self.line(*marker, *text);
        }
        self
    }

    /// The generic rule step: record the hit line, or downgrade and record the miss line.
    pub fn require(
        &mut self,
        holds: bool,
        on_miss: CheckStatus,
        found: impl Into<String>,
        missing: impl Into<String>,
    ) -> bool {
        if holds {
            self.line(Marker::Pass, found);
        } else {
            self.worsen(on_miss);
            self.line(marker_for(on_miss), missing);
        }
        holds
    }

    pub fn build(self) -> Check {
        debug!(check_id = self.id, status = self.status.as_str(), "check evaluated");
        Check {
            id: self.id.to_string(),
            title: self.title.to_string(),
            status: self.status,
            details: self.details,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub on_miss: CheckStatus,
    pub found: &'static str,
    pub missing: &'static str,
}

pub fn apply_keyword_rules(builder: &mut CheckBuilder, text: &str, rules: &[KeywordRule]) {
    for rule in rules {
        builder.require(
            contains_any(text, rule.keywords),
            rule.on_miss,
            rule.found,
            rule.missing,
        );
    }
}

/// A model check decided by whether some sheet name matches.
#[derive(Debug, Clone, Copy)]
pub struct SheetRule {
    pub id: &'static str,
    pub title: &'static str,
    pub patterns: &'static [NamePattern],
    pub on_miss: CheckStatus,
    pub found_label: &'static str,
    pub missing: &'static str,
    pub notes_when_found: &'static [(Marker, &'static str)],
    pub notes_when_missing: &'static [(Marker, &'static str)],
}

pub fn evaluate_sheet_rule(rule: &SheetRule, sheet_names: &[String]) -> Check {
    let mut builder = CheckBuilder::new(rule.id, rule.title, CheckCategory::Excel);
    let matched = find_sheet_by_name_pattern(sheet_names, rule.patterns);
    let found = matched
        .map(|name| format!("{}: \"{}\"", rule.found_label, name))
        .unwrap_or_default();

    if builder.require(matched.is_some(), rule.on_miss, found, rule.missing) {
        builder.lines(rule.notes_when_found);
    } else {
        builder.lines(rule.notes_when_missing);
    }

    builder.build()
}
