use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const SECONDARY: Color = Color::TrueColor { r: 180, g: 140, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 190, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const HIGH_SEC: Color = Color::Green;
pub const LOW_SEC: Color = Color::Yellow;
pub const NULL_SEC: Color = Color::Red;
