pub use crate::color::Color;
pub use crate::error::{LayoutError, WidgetError};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::*;
pub use crate::scene::{Scene, SceneNode};
pub use crate::signal::{Signal, signal};
pub use crate::text::{Monospace, TextMeasure, TextMetrics};
pub use crate::theme::Theme;
