//! Size hints and policies for layout negotiation.

use icefuse_controls_render::Size;

/// How a widget behaves when a layout offers it space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// The widget cannot grow or shrink from its hint.
    Fixed,
    /// The widget has a preferred size but can grow or shrink.
    #[default]
    Preferred,
    /// The widget actively wants as much space as possible.
    Expanding,
}

/// A horizontal/vertical pair of size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Horizontal policy.
    pub horizontal: SizePolicy,
    /// Vertical policy.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a policy pair.
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A widget's preferred, minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size.
    pub preferred: Size,
    /// The minimum acceptable size, if constrained.
    pub minimum: Option<Size>,
    /// The maximum acceptable size, if constrained.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a hint with only a preferred size.
    pub const fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a hint from raw dimensions.
    pub const fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_builder_sets_bounds() {
        let hint = SizeHint::from_dimensions(160.0, 28.0)
            .with_minimum(Size::new(60.0, 24.0))
            .with_maximum(Size::new(400.0, 28.0));
        assert_eq!(hint.preferred, Size::new(160.0, 28.0));
        assert_eq!(hint.minimum, Some(Size::new(60.0, 24.0)));
        assert_eq!(hint.maximum, Some(Size::new(400.0, 28.0)));
    }
}
