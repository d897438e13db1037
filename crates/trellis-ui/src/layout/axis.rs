use trellis_core::Size;

use super::{Align, ConstraintLookup, Element, Metrics, Policy, constraint_for};

/// Direction children are stacked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// (on-axis, off-axis) components of a width/height pair.
    fn split(self, width: f32, height: f32) -> (f32, f32) {
        match self {
            Axis::Vertical => (height, width),
            Axis::Horizontal => (width, height),
        }
    }

    /// Inverse of `split`: back to (x/width, y/height).
    fn join(self, on: f32, off: f32) -> (f32, f32) {
        match self {
            Axis::Vertical => (off, on),
            Axis::Horizontal => (on, off),
        }
    }
}

/// Lays out elements in a horizontal or vertical group.
///
/// On-axis, unstretched elements get their preferred size and the space left
/// over (after gaps) is divided among stretched elements by weight. With no
/// stretched elements the whole group is placed by the on-axis alignment.
///
/// Off-axis, each element is sized by the [`Policy`] and placed by the
/// off-axis alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    axis: Axis,
    align_on: Align,
    align_off: Align,
    off_policy: Policy,
    gap: u32,
}

impl AxisLayout {
    pub const DEFAULT_GAP: u32 = 5;

    /// Vertical layout centered on both axes, gap 5, preferred off-axis size.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Horizontal layout centered on both axes, gap 5, preferred off-axis size.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            align_on: Align::Center,
            align_off: Align::Center,
            off_policy: Policy::Default,
            gap: Self::DEFAULT_GAP,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn gap_px(&self) -> u32 {
        self.gap
    }

    pub fn align_on(mut self, align: Align) -> Self {
        self.align_on = align;
        self
    }

    pub fn align_off(mut self, align: Align) -> Self {
        self.align_off = align;
        self
    }

    pub fn off_policy(mut self, policy: Policy) -> Self {
        self.off_policy = policy;
        self
    }

    /// Stretch everything to the container's off-axis extent.
    pub fn off_stretch(self) -> Self {
        self.off_policy(Policy::Stretch)
    }

    /// Stretch everything to the off-axis size of the largest element.
    pub fn off_equalize(self) -> Self {
        self.off_policy(Policy::Equalize)
    }

    /// Inter-element gap, in pixels.
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn align_top(self) -> Self {
        match self.axis {
            Axis::Vertical => self.align_on(Align::Start),
            Axis::Horizontal => self.align_off(Align::Start),
        }
    }

    pub fn align_bottom(self) -> Self {
        match self.axis {
            Axis::Vertical => self.align_on(Align::End),
            Axis::Horizontal => self.align_off(Align::End),
        }
    }

    pub fn align_left(self) -> Self {
        match self.axis {
            Axis::Vertical => self.align_off(Align::Start),
            Axis::Horizontal => self.align_on(Align::Start),
        }
    }

    pub fn align_right(self) -> Self {
        match self.axis {
            Axis::Vertical => self.align_off(Align::End),
            Axis::Horizontal => self.align_on(Align::End),
        }
    }

    fn gap_total(&self, m: &Metrics) -> f32 {
        self.gap as f32 * m.gaps() as f32
    }

    /// Size the group would like given the hints: preferred sizes plus gaps
    /// on-axis, the largest preferred size off-axis.
    pub fn compute_size<E, C>(&self, elems: &[E], constraints: &C, hint_x: f32, hint_y: f32) -> Size
    where
        E: Element,
        C: ConstraintLookup<E> + ?Sized,
    {
        let m = Metrics::collect(elems, constraints, hint_x, hint_y);
        let gaps = self.gap_total(&m);
        match self.axis {
            Axis::Vertical => Size::new(m.max_width, m.total_height + gaps),
            Axis::Horizontal => Size::new(m.total_width + gaps, m.max_height),
        }
    }

    /// Resizes and positions every visible element inside `width` x `height`.
    /// Invisible elements are left untouched.
    pub fn layout<E, C>(&self, elems: &mut [E], constraints: &C, width: f32, height: f32)
    where
        E: Element,
        C: ConstraintLookup<E> + ?Sized,
    {
        let m = Metrics::collect(elems, constraints, width, height);
        let (on_extent, off_extent) = self.axis.split(width, height);
        let (total_on, _) = self.axis.split(m.total_width, m.total_height);
        let (_, max_off) = self.axis.split(m.max_width, m.max_height);
        let fix_on = self.axis.split(m.fix_width, m.fix_height).0;

        let stretch_extent = (on_extent - self.gap_total(&m) - fix_on).max(0.0);
        let mut cursor = if m.stretch_count > 0 {
            0.0
        } else {
            self.align_on.offset(total_on, on_extent)
        };
        log::trace!(
            "{:?} layout: {} visible, {} stretched, extent {}x{}, stretch extent {}",
            self.axis,
            m.count,
            m.stretch_count,
            width,
            height,
            stretch_extent
        );

        for elem in elems.iter_mut() {
            if !elem.is_visible() {
                continue;
            }
            let psize = elem.preferred_size(width, height);
            let (pref_on, pref_off) = self.axis.split(psize.width, psize.height);
            let c = constraint_for(constraints, &*elem);

            let size_on = c.compute_size(pref_on, m.total_weight, stretch_extent);
            let size_off = self.off_policy.size(pref_off, max_off, off_extent);
            let (w, h) = self.axis.join(size_on, size_off);
            elem.resize(w, h);

            let (x, y) = self
                .axis
                .join(cursor, self.align_off.offset(size_off, off_extent));
            elem.set_location(x, y);

            cursor += size_on + self.gap as f32;
        }
    }
}
