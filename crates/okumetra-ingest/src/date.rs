use jiff::civil;

/// Parse a clinical date: `YYYY-MM-DD` with `-`, `.`, or `/` separators and
/// unpadded month/day (`2025-8-16`, `2025.08.16`, `2025/8/6`).
pub fn parse_clinical_date(text: &str) -> Option<civil::Date> {
    let mut parts = text.trim().split(['-', '.', '/']);
    let year = parts.next()?.trim().parse::<i16>().ok()?;
    let month = parts.next()?.trim().parse::<i8>().ok()?;
    let day = parts.next()?.trim().parse::<i8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    civil::Date::new(year, month, day).ok()
}
