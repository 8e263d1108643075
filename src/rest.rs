//! Rest-period text → seconds
//!
//! Sheets write rest periods by hand ("90s", "2 min", "3-4min"). Ranges resolve to
//! their lower bound. Anything else stays text-only.

/// Parse a rest period into whole seconds
pub fn parse_rest_seconds(text: &str) -> Option<u32> {
    let s: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if let Some(pos) = s.find("min") {
        let minutes = &s[..pos];
        let lower = minutes.split('-').next().unwrap_or(minutes);
        return leading_int(lower).and_then(|m| m.checked_mul(60));
    }

    if s.ends_with('s') {
        return leading_int(&s);
    }

    None
}

fn leading_int(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
