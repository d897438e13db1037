use trellis_core::LayoutError;

/// Placement of content inside a larger extent; start is left/top and end is
/// right/bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn offset(self, size: f32, extent: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => (extent - size) / 2.0,
            Align::End => extent - size,
        }
    }
}

/// Off-axis sizing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Preferred size.
    #[default]
    Default,
    /// Everything as wide (or tall) as the container.
    Stretch,
    /// Everything as wide (or tall) as the largest sibling.
    Equalize,
}

impl Policy {
    pub fn size(self, size: f32, max_size: f32, extent: f32) -> f32 {
        match self {
            Policy::Default => size,
            Policy::Stretch => extent,
            Policy::Equalize => max_size,
        }
    }
}

/// Per-element on-axis hint.
///
/// Stretched elements share whatever on-axis space the unstretched ones leave
/// over, in proportion to their weight. The weight of an unstretched
/// constraint is never read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    stretch: bool,
    weight: f32,
}

impl Constraint {
    pub const UNSTRETCHED: Constraint = Constraint {
        stretch: false,
        weight: 1.0,
    };

    pub const STRETCHED: Constraint = Constraint {
        stretch: true,
        weight: 1.0,
    };

    /// Stretch with weight 1.
    pub const fn stretched() -> Self {
        Self::STRETCHED
    }

    /// Stretch with a custom weight; rejects anything not finite and > 0.
    pub fn stretched_weighted(weight: f32) -> Result<Self, LayoutError> {
        if weight.is_finite() && weight > 0.0 {
            Ok(Self {
                stretch: true,
                weight,
            })
        } else {
            Err(LayoutError::InvalidWeight(weight))
        }
    }

    pub fn is_stretched(&self) -> bool {
        self.stretch
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// On-axis size for an element preferring `size`, given the summed weight
    /// of all stretched siblings and the space they share.
    pub fn compute_size(&self, size: f32, total_weight: f32, avail: f32) -> f32 {
        if self.stretch && total_weight > 0.0 {
            avail * self.weight / total_weight
        } else {
            size
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::UNSTRETCHED
    }
}
