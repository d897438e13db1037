use crate::Color;

/// Colors and metrics used by the stock widgets.
///
/// Small and semantic on purpose; games usually override a couple of fields
/// and keep the rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Default container surface (panels, field backgrounds).
    pub surface: Color,
    /// Primary foreground color on top of `surface`.
    pub on_surface: Color,
    /// Slider bar and thumb.
    pub primary: Color,
    /// Text cursor.
    pub cursor: Color,
    pub font_px: f32,
    /// Space left and right of a field's text.
    pub field_padding_x: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            primary: Color::BLACK,
            cursor: Color::from_hex("#DDDDDD"),
            font_px: 16.0,
            field_padding_x: 4.0,
        }
    }
}
