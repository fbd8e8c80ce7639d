use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
pub const ACCENT_ALT: Color = Color::Rgb(0xec, 0x48, 0x99);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SELECTION_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
