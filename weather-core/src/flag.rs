/// Offset from an uppercase ASCII letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Flag glyph for a two-letter ISO country code.
///
/// Absent input, input that is not exactly two characters long, or characters
/// outside `A-Z` after uppercasing all yield an empty string.
pub fn flag_for(country_code: Option<&str>) -> String {
    let Some(code) = country_code else {
        return String::new();
    };

    if code.chars().count() != 2 {
        return String::new();
    }

    code.chars()
        .map(|c| c.to_ascii_uppercase())
        .map(|c| {
            c.is_ascii_uppercase()
                .then(|| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
                .flatten()
        })
        .collect::<Option<String>>()
        .unwrap_or_default()
}
