use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const SECONDARY: Color = Color::from_u32(0x00116e33);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const TEXT: Color = Color::from_u32(0x00e8e8e8);
pub const WARN: Color = Color::from_u32(0x00e9b44c);
pub const ERROR: Color = Color::from_u32(0x00d95f5f);
