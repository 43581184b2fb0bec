//! Height constraint the control hands to the host layout system.

use crate::config::LabelMetrics;

/// Priority of a layout constraint, on the usual 1..=1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutPriority(pub u16);

impl LayoutPriority {
    /// Must be satisfied.
    pub const REQUIRED: Self = Self(1000);
    /// Authoritative unless something at required priority competes.
    pub const NEAR_REQUIRED: Self = Self(999);

    /// Check if a competing constraint at `other` priority wins over this one.
    pub fn yields_to(self, other: Self) -> bool {
        other >= self
    }
}

/// Fixed height the control asks its host layout for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightConstraint {
    pub height: f64,
    pub priority: LayoutPriority,
}

impl HeightConstraint {
    /// The control's own height constraint.
    pub fn for_metrics(metrics: &LabelMetrics) -> Self {
        Self {
            height: metrics.const_height(),
            priority: LayoutPriority::NEAR_REQUIRED,
        }
    }

    /// Height a host should use, given an optional competing height.
    pub fn resolve(&self, competing: Option<(f64, LayoutPriority)>) -> f64 {
        match competing {
            Some((height, priority)) if self.priority.yields_to(priority) => height,
            _ => self.height,
        }
    }
}
