//! Axis layout, text fields and sliders.
//!
//! ```rust
//! use trellis_ui::*;
//!
//! let mut form = Group::new(AxisLayout::horizontal().align_left().off_stretch());
//! let name = Field::new("player one");
//! let volume = Slider::new(0.5, 0.0, 1.0).unwrap();
//! let (text, value) = (name.text.clone(), volume.value.clone());
//!
//! form.add(name);
//! form.add_with(volume, Constraint::stretched());
//! form.resize(400.0, 24.0);
//!
//! assert_eq!(text.get(), "player one");
//! assert_eq!(value.get(), 0.5);
//! ```

pub mod field;
pub mod group;
pub mod layout;
pub mod slider;

pub use field::Field;
pub use group::{ElementId, Group};
pub use layout::{
    Align, Axis, AxisLayout, Constraint, ConstraintLookup, Element, Metrics, NoConstraints,
    Policy, Spacer,
};
pub use slider::Slider;
