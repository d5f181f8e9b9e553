use super::F;

/// Geometric cut thresholds for the crop.
///
/// A vertex is discarded if it lies in the low "foot" band, or if it is both
/// forward of `head_z_limit` and below `shell_safe_height` (so high structure
/// that extends forward, e.g. a shell, survives the forward cut).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Remove anything below this height.
    pub foot_y_limit: F,
    /// Remove anything extending past this Z...
    pub head_z_limit: F,
    /// ...unless it is at or above this height.
    pub shell_safe_height: F,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            foot_y_limit: 0.35,
            head_z_limit: 1.4,
            shell_safe_height: 0.8,
        }
    }
}

impl Thresholds {
    /// Whether a vertex at this position survives the crop.
    /// Pure per-vertex decision, any three finite or non-finite values are valid.
    #[inline]
    pub fn keep(&self, [_, y, z]: [F; 3]) -> bool {
        let is_foot = y < self.foot_y_limit;
        let is_head = z < self.head_z_limit && y < self.shell_safe_height;
        !is_foot && !is_head
    }
}
