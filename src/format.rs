//! Display helpers: name casing, unit conversion and type colors

use ratatui::style::Color;

/// Badge background for types missing from [`TYPE_COLORS`].
pub const DEFAULT_TYPE_COLOR: &str = "#bbb";

pub const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A77A"),
    ("fire", "#EE8130"),
    ("water", "#6390F0"),
    ("electric", "#F7D02C"),
    ("grass", "#7AC74C"),
    ("ice", "#96D9D6"),
    ("fighting", "#C22E28"),
    ("poison", "#A33EA1"),
    ("ground", "#E2BF65"),
    ("flying", "#A98FF3"),
    ("psychic", "#F95587"),
    ("bug", "#A6B91A"),
    ("rock", "#B6A136"),
    ("ghost", "#735797"),
    ("dragon", "#6F35FC"),
    ("dark", "#705746"),
    ("steel", "#B7B7CE"),
    ("fairy", "#D685AD"),
];

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"tackle-hit"` -> `"Tackle Hit"`
pub fn title_case(text: &str) -> String {
    text.split('-')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decimetres to metres with one decimal place.
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1}m", decimetres as f64 / 10.0)
}

/// Hectograms to kilograms with one decimal place.
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1}kg", hectograms as f64 / 10.0)
}

pub fn type_color(type_name: &str) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

/// Parses `#RGB` or `#RRGGBB`.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 => {
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::Rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

pub fn type_badge_color(type_name: &str) -> Color {
    parse_hex_color(type_color(type_name)).unwrap_or(Color::Gray)
}
