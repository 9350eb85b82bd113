use colored::Color;

pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const HEADER: Color = Color::Blue;

pub const FOUND: Color = Color::Green;
pub const NOT_FOUND: Color = Color::Yellow;
pub const CONNECTION_ERROR: Color = Color::Red;
