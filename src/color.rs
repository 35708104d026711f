
/// Splits a hex color (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`) into its channels
///
/// Returns [None] if the color does not contain exactly 3 or 6 hex digits
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = expand_hex(hex)?;

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Returns a new hex color with every RGB channel scaled by `1 + percent`
///
/// Negative percentages darken the color. Every channel is floored and clamped to `0..=255`,
/// channels which can not be parsed are treated as `0`.
/// The returned color is always `#` followed by six lowercase hex digits.
///
/// # Examples
///
/// ```
/// use lumberjack::color::brighten;
///
/// assert_eq!(brighten("#6B7280", 0.2), "#808899");
/// assert_eq!(brighten("#ABC", 0.0), "#aabbcc");
/// assert_eq!(brighten("#FFFFFF", 0.5), "#ffffff");
/// ```
pub fn brighten(hex: &str, percent: f64) -> String {
    let hex = expand_hex(hex).unwrap_or_default();

    let channel = |range: std::ops::Range<usize>| {
        let value = hex.get(range).
                and_then(|digits| u8::from_str_radix(digits, 16).ok()).
                unwrap_or(0);

        (value as f64 * (1.0 + percent)).floor().clamp(0.0, 255.0) as u8
    };

    format!("#{:02x}{:02x}{:02x}", channel(0..2), channel(2..4), channel(4..6))
}

fn expand_hex(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => Some(hex.chars().flat_map(|c| [c, c]).collect()),
        6 => Some(hex.to_string()),

        _ => None,
    }
}
