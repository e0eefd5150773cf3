/// Callers pass text that is already lowercased; keywords are lowercase literals.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

pub fn matching_keywords<'a>(text: &str, keywords: &[&'a str]) -> Vec<&'a str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

/// Newest first; stops early rather than wrapping below `i32::MIN`.
pub fn recent_years(as_of_year: i32, window_years: u32) -> impl Iterator<Item = i32> {
    (0..window_years).map_while(move |offset| {
        i32::try_from(offset)
            .ok()
            .and_then(|offset| as_of_year.checked_sub(offset))
    })
}

/// True when `as_of_year` or one of the `window_years - 1` years before it appears.
pub fn contains_recent_year(text: &str, as_of_year: i32, window_years: u32) -> bool {
    recent_years(as_of_year, window_years).any(|year| text.contains(&year.to_string()))
}
