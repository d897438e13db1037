use trellis_core::prelude::*;

use crate::layout::Element;

pub const BAR_HEIGHT: f32 = 5.0;
pub const THUMB_HEIGHT: f32 = BAR_HEIGHT * 2.0;
pub const THUMB_WIDTH: f32 = 4.0;
/// Width asked for when the parent offers no width hint.
pub const DEFAULT_WIDTH: f32 = 100.0;

/// Horizontal slider over `[min, max]`.
///
/// Press, drag and release all jump the value to the pointer, as long as the
/// pointer is inside the slider.
pub struct Slider {
    /// Always within `[min, max]` when written through the slider.
    pub value: Signal<f32>,
    min: f32,
    max: f32,
    theme: Theme,
    visible: bool,
    bounds: Rect,
}

impl Slider {
    pub fn new(value: f32, min: f32, max: f32) -> Result<Self, WidgetError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(WidgetError::NonFinite);
        }
        if max <= min {
            return Err(WidgetError::EmptyRange { min, max });
        }
        Ok(Self {
            value: signal(clamp_or_min(value, min, max)),
            min,
            max,
            theme: Theme::default(),
            visible: true,
            bounds: Rect::default(),
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Clamps into range; returns whether the value changed.
    pub fn set_value(&self, value: f32) -> bool {
        self.value
            .replace_if_changed(clamp_or_min(value, self.min, self.max))
    }

    /// Thumb centre, in local x.
    pub fn thumb_center(&self) -> f32 {
        (self.value.get() - self.min) / self.range() * self.bounds.w
    }

    pub fn compute_size(&self, hint_x: f32, _hint_y: f32) -> Size {
        let width = if hint_x == 0.0 { DEFAULT_WIDTH } else { hint_x };
        Size::new(width, THUMB_HEIGHT + BAR_HEIGHT)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.handle_pointer(x, y)
    }

    pub fn pointer_drag(&mut self, x: f32, y: f32) -> bool {
        self.handle_pointer(x, y)
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.handle_pointer(x, y)
    }

    pub fn handle_input(&mut self, ev: &InputEvent) -> bool {
        let InputEvent::Pointer(pe) = ev else {
            return false;
        };
        let Vec2 { x, y } = pe.position;
        match pe.event {
            PointerEventKind::Down(_) => self.pointer_down(x, y),
            PointerEventKind::Drag => self.pointer_drag(x, y),
            PointerEventKind::Up(_) => self.pointer_up(x, y),
            PointerEventKind::Cancel => false,
        }
    }

    pub fn render(&self, scene: &mut Scene) {
        let Rect { x, y, w, .. } = self.bounds;
        scene.fill_rect(Rect::new(x, y + THUMB_HEIGHT, w, BAR_HEIGHT), self.theme.primary);
        scene.fill_rect(
            Rect::new(
                x + self.thumb_center() - THUMB_WIDTH / 2.0,
                y,
                THUMB_WIDTH,
                THUMB_HEIGHT,
            ),
            self.theme.primary,
        );
    }

    /// Maps a local x to a value; ignores points outside the slider.
    fn handle_pointer(&mut self, x: f32, y: f32) -> bool {
        let local = Rect::new(0.0, 0.0, self.bounds.w, self.bounds.h);
        if self.bounds.w <= 0.0 || !local.contains(Vec2 { x, y }) {
            log::trace!("slider pointer at ({x}, {y}) outside {:?}", local.size());
            return false;
        }
        let t = (x / self.bounds.w).clamp(0.0, 1.0);
        self.set_value(t * self.range() + self.min);
        true
    }
}

fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

impl Element for Slider {
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn preferred_size(&self, hint_x: f32, hint_y: f32) -> Size {
        self.compute_size(hint_x, hint_y)
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
