use super::{ConstraintLookup, Element, constraint_for};

/// Aggregate sizing of the visible children of one container.
///
/// Built fresh for every pass and thrown away afterwards; caching belongs to
/// the elements, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Visible elements.
    pub count: usize,

    pub total_width: f32,
    pub total_height: f32,

    pub max_width: f32,
    pub max_height: f32,

    /// Sums over unstretched elements only.
    pub fix_width: f32,
    pub fix_height: f32,

    pub stretch_count: usize,
    /// Sum of weights over stretched elements only.
    pub total_weight: f32,
}

impl Metrics {
    pub fn collect<E, C>(elems: &[E], constraints: &C, hint_x: f32, hint_y: f32) -> Self
    where
        E: Element,
        C: ConstraintLookup<E> + ?Sized,
    {
        let mut m = Metrics::default();
        for elem in elems.iter().filter(|e| e.is_visible()) {
            m.count += 1;

            let psize = elem.preferred_size(hint_x, hint_y);
            m.total_width += psize.width;
            m.total_height += psize.height;
            m.max_width = m.max_width.max(psize.width);
            m.max_height = m.max_height.max(psize.height);

            let c = constraint_for(constraints, elem);
            if c.is_stretched() {
                m.stretch_count += 1;
                m.total_weight += c.weight();
            } else {
                m.fix_width += psize.width;
                m.fix_height += psize.height;
            }
        }
        m
    }

    /// Number of gaps between visible elements.
    pub fn gaps(&self) -> usize {
        self.count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Constraint, NoConstraints, Spacer};

    #[test]
    fn test_empty() {
        let m = Metrics::collect::<Spacer, _>(&[], &NoConstraints, 0.0, 0.0);
        assert_eq!(m, Metrics::default());
        assert_eq!(m.gaps(), 0);
    }

    #[test]
    fn test_skips_invisible() {
        let elems = [
            Spacer::new(10.0, 5.0),
            Spacer::new(500.0, 500.0).hidden(),
            Spacer::new(20.0, 7.0),
        ];
        let m = Metrics::collect(&elems, &NoConstraints, 0.0, 0.0);
        assert_eq!(m.count, 2);
        assert_eq!(m.total_width, 30.0);
        assert_eq!(m.total_height, 12.0);
        assert_eq!(m.max_width, 20.0);
        assert_eq!(m.max_height, 7.0);
        assert_eq!(m.fix_width, 30.0);
        assert_eq!(m.stretch_count, 0);
        assert_eq!(m.total_weight, 0.0);
    }

    #[test]
    fn test_stretched_split_from_fixed() {
        let elems = [
            Spacer::new(10.0, 5.0),
            Spacer::new(20.0, 7.0),
            Spacer::new(30.0, 9.0),
        ];
        let weighted = Constraint::stretched_weighted(2.0).unwrap();
        let lookup = |s: &Spacer| match s.preferred.width as u32 {
            20 => Some(Constraint::stretched()),
            30 => Some(weighted),
            _ => None,
        };
        let m = Metrics::collect(&elems, &lookup, 0.0, 0.0);
        assert_eq!(m.count, 3);
        assert_eq!(m.stretch_count, 2);
        assert_eq!(m.total_weight, 3.0);
        assert_eq!(m.fix_width, 10.0);
        assert_eq!(m.fix_height, 5.0);
        assert_eq!(m.total_width, 60.0);
    }

    #[test]
    fn test_hidden_stretched_adds_no_weight() {
        let elems = [Spacer::new(10.0, 5.0).hidden()];
        let m = Metrics::collect(&elems, &|_: &Spacer| Some(Constraint::stretched()), 0.0, 0.0);
        assert_eq!(m.stretch_count, 0);
        assert_eq!(m.total_weight, 0.0);
    }
}
