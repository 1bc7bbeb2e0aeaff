use ratatui::style::Color;

pub const BRAND: Color = Color::Rgb(0x82, 0x57, 0xE5);
pub const FOCUSED_BORDER: Color = BRAND;
pub const UNFOCUSED_BORDER: Color = Color::Rgb(0xB2, 0xB2, 0xB2);
pub const SELECTED_BG: Color = Color::Rgb(0x3D, 0x3D, 0x4D);
pub const STRIPE_BG: Color = Color::Rgb(0x25, 0x25, 0x2B);

pub const DONE_TEXT: Color = Color::Rgb(0x1D, 0xB8, 0x63);
pub const DONE_MARKER: Color = Color::Rgb(0x1D, 0xB8, 0x63);
pub const NORMAL_TEXT: Color = Color::Rgb(0xDD, 0xDD, 0xDD);
pub const MARKER_BORDER: Color = Color::Rgb(0xB2, 0xB2, 0xB2);
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const DISABLED_TEXT: Color = Color::Rgb(0x55, 0x55, 0x55);
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const POPUP_BG: Color = Color::Black;
pub const WARNING_TEXT: Color = Color::Yellow;
