//! # Core types
//!
//! Everything Trellis widgets share with the host engine lives here, and none
//! of it depends on a renderer:
//!
//! - `Signal<T>`: observable value, the way widgets expose their state.
//! - `PointerEvent` / `KeyEvent`: input as the host delivers it.
//! - `Scene`: the draw list widgets fill in.
//! - `TextMeasure`: caret geometry for a line of text.
//!
//! ## Signals
//!
//! ```rust
//! use trellis_core::*;
//!
//! let volume = signal(0.5f32);
//! volume.subscribe(|v| assert!(*v <= 1.0));
//! volume.set(0.75);
//! volume.update(|v| *v += 0.25);
//! assert_eq!(volume.get(), 1.0);
//! ```
//!
//! ## Text measurement
//!
//! ```rust
//! use trellis_core::*;
//!
//! let m = Monospace::new(8.0, 16.0).measure("abc");
//! assert_eq!(m.positions, vec![0.0, 8.0, 16.0, 24.0]);
//! assert_eq!(m.byte_offsets, vec![0, 1, 2, 3]);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod signal;
pub mod tests;
pub mod text;
pub mod theme;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
pub use signal::*;
pub use text::*;
pub use theme::*;
