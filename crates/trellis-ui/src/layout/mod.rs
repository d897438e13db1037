//! Box layout over abstract elements.
//!
//! The solver in [`axis`] never sees a concrete widget. Anything that can
//! report a preferred size and accept a resolved size and location is an
//! [`Element`]; per-element hints come from a separate [`ConstraintLookup`],
//! so the same element can sit in differently configured containers.
//!
//! ```rust
//! use trellis_ui::layout::*;
//! use trellis_core::Size;
//!
//! let mut row = vec![
//!     Spacer::new(10.0, 20.0),
//!     Spacer::new(15.0, 20.0),
//!     Spacer::new(5.0, 20.0),
//! ];
//! let layout = AxisLayout::horizontal();
//! assert_eq!(layout.compute_size(&row, &NoConstraints, 0.0, 0.0), Size::new(40.0, 20.0));
//!
//! layout.layout(&mut row, &NoConstraints, 100.0, 20.0);
//! assert_eq!(row[0].bounds().x, 35.0);
//! assert_eq!(row[1].bounds().x, 50.0);
//! assert_eq!(row[2].bounds().x, 70.0);
//! ```

pub mod axis;
pub mod metrics;
pub mod policy;

pub use axis::{Axis, AxisLayout};
pub use metrics::Metrics;
pub use policy::{Align, Constraint, Policy};

use trellis_core::{Rect, Size};

/// A layout participant, as seen by a parent container.
pub trait Element {
    fn is_visible(&self) -> bool {
        true
    }
    /// Natural size given the space the parent is offering.
    ///
    /// Must return the same answer for the same hints within a layout pass:
    /// the solver asks twice and elements are free to cache.
    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size;
    /// Counter that moves whenever the preferred size may have changed behind
    /// a shared reference (for example through a signal). Containers that
    /// cache sizes compare it before trusting the cache.
    fn revision(&self) -> u64 {
        0
    }
    fn resize(&mut self, width: f32, height: f32);
    fn set_location(&mut self, x: f32, y: f32);
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size {
        (**self).preferred_size(hint_x, hint_y)
    }
    fn revision(&self) -> u64 {
        (**self).revision()
    }
    fn resize(&mut self, width: f32, height: f32) {
        (**self).resize(width, height)
    }
    fn set_location(&mut self, x: f32, y: f32) {
        (**self).set_location(x, y)
    }
}

impl<T: Element + ?Sized> Element for &mut T {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size {
        (**self).preferred_size(hint_x, hint_y)
    }
    fn revision(&self) -> u64 {
        (**self).revision()
    }
    fn resize(&mut self, width: f32, height: f32) {
        (**self).resize(width, height)
    }
    fn set_location(&mut self, x: f32, y: f32) {
        (**self).set_location(x, y)
    }
}

/// Where a container finds the [`Constraint`] attached to a child.
///
/// `None` means "no constraint", which the solver reads as
/// [`Constraint::UNSTRETCHED`].
pub trait ConstraintLookup<E: ?Sized> {
    fn lookup(&self, elem: &E) -> Option<Constraint>;
}

/// Every element unstretched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoConstraints;

impl<E: ?Sized> ConstraintLookup<E> for NoConstraints {
    fn lookup(&self, _elem: &E) -> Option<Constraint> {
        None
    }
}

impl<E: ?Sized, F> ConstraintLookup<E> for F
where
    F: Fn(&E) -> Option<Constraint>,
{
    fn lookup(&self, elem: &E) -> Option<Constraint> {
        self(elem)
    }
}

pub(crate) fn constraint_for<E, C>(constraints: &C, elem: &E) -> Constraint
where
    E: ?Sized,
    C: ConstraintLookup<E> + ?Sized,
{
    constraints.lookup(elem).unwrap_or(Constraint::UNSTRETCHED)
}

/// Empty box with a fixed preferred size; pads layouts and stands in for
/// widgets in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacer {
    pub preferred: Size,
    pub visible: bool,
    bounds: Rect,
}

impl Spacer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            visible: true,
            bounds: Rect::default(),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Size and location assigned by the last layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Element for Spacer {
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn preferred_size(&self, _hint_x: f32, _hint_y: f32) -> Size {
        self.preferred
    }
    fn resize(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
    }
    fn set_location(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }
}
