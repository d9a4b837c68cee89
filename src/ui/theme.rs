use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub value: Color,     // Numbers in the input field
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color, // Status bar background
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),        // Blue
    secondary: Color::Rgb(250, 179, 135),      // Orange
    comment: Color::Rgb(108, 112, 134),        // Grey
    success: Color::Rgb(166, 227, 161),        // Green for the result value
    value: Color::Rgb(250, 179, 135),          // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),            // Slightly lighter BG for the status bar
};
