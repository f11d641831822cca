//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Style for the header band title (bold, bright).
pub fn header_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the screen body text.
pub fn body_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for key hints in the body and status line.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for overlay borders (voice, search, mode selector).
pub fn overlay_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for voice tags inside the voice overlay.
pub fn tag_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for the status line.
pub fn status_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Parses a `#rrggbb` group color into a terminal color. Falls back to the
/// default header color on malformed input.
pub fn group_color(hex: &str) -> Color {
    parse_hex_color(hex).unwrap_or(Color::Magenta)
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}
