use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color, // Blue
    pub comment: Color, // Grey
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub sign_bit: Color,     // Pink for the IEEE-754 sign bit
    pub exponent: Color,     // Blue for exponent bits
    pub fraction: Color,     // Green for fraction bits
    pub bit_set: Color,      // Bright for 1 bits in integer patterns
    pub bit_clear: Color,    // Dim for 0 bits
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250), // Blue
    comment: Color::Rgb(108, 112, 134),
    number: Color::Rgb(250, 179, 135),          // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175),  // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),   // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    sign_bit: Color::Rgb(245, 194, 231),  // Pink
    exponent: Color::Rgb(137, 180, 250),  // Blue
    fraction: Color::Rgb(166, 227, 161),  // Green
    bit_set: Color::Rgb(249, 226, 175),   // Yellow
    bit_clear: Color::Rgb(108, 112, 134), // Grey
};
