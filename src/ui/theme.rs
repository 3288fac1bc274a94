use ratatui::style::Color;

// The shipped palette: warm orange on light yellow with teal accents.
pub const PRIMARY: Color = Color::Rgb(0xff, 0x70, 0x43);
pub const SECONDARY: Color = Color::Rgb(0x4d, 0xb6, 0xac);
pub const ACCENT: Color = Color::Rgb(0xfb, 0xc0, 0x2d);
pub const BORDER: Color = Color::Rgb(0xd8, 0x43, 0x15);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
