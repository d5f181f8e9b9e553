/// Total map from original 1-based vertex ordinals to post-crop ordinals.
///
/// Built in one forward pass over the classification decisions. Kept
/// vertices receive `1..=kept()` in their original relative order.
#[derive(Debug, Default, Clone)]
pub struct VertexRemap {
    // slot i holds the new ordinal of original vertex i+1, or None if removed
    new_idx: Vec<Option<u32>>,
    kept: u32,
}

impl VertexRemap {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            new_idx: Vec::with_capacity(n),
            kept: 0,
        }
    }

    /// Records the decision for the next vertex in appearance order and
    /// returns its new ordinal if kept.
    pub fn push(&mut self, keep: bool) -> Option<u32> {
        let ni = keep.then(|| {
            self.kept += 1;
            self.kept
        });
        self.new_idx.push(ni);
        ni
    }

    /// New ordinal of original vertex `old` (1-based). `None` for removed
    /// vertices and for indices never seen as a vertex line.
    #[inline]
    pub fn get(&self, old: i64) -> Option<u32> {
        if old < 1 {
            return None;
        }
        self.new_idx.get(old as usize - 1).copied().flatten()
    }

    /// Whether `old` is outside the range of vertices seen at all, as
    /// opposed to a vertex that was classified away.
    #[inline]
    pub fn is_dangling(&self, old: i64) -> bool {
        old < 1 || old as usize > self.new_idx.len()
    }

    pub fn total(&self) -> usize {
        self.new_idx.len()
    }

    pub fn kept(&self) -> usize {
        self.kept as usize
    }
}
