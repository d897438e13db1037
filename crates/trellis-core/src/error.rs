use thiserror::Error;

/// Errors raised while configuring a layout.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("stretch weight must be finite and greater than zero, got {0}")]
    InvalidWeight(f32),
}

/// Errors raised while constructing a widget.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WidgetError {
    #[error("slider range is empty: min {min} must be below max {max}")]
    EmptyRange { min: f32, max: f32 },
    #[error("slider bounds must be finite")]
    NonFinite,
}
