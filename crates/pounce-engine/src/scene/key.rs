/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Default layer for world geometry.
    pub const BASE: ZIndex = ZIndex(0);
    /// Layer for overlays drawn above the world.
    pub const OVERLAY: ZIndex = ZIndex(100);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// The layer directly above this one.
    #[inline]
    pub const fn above(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Stable sort key for draw items.
///
/// Field order gives the derived ordering:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        let low_late = SortKey::new(ZIndex(0), 9);
        let high_early = SortKey::new(ZIndex(1), 0);
        assert!(low_late < high_early);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        assert!(SortKey::new(ZIndex::BASE, 1) < SortKey::new(ZIndex::BASE, 2));
    }

    #[test]
    fn above_saturates() {
        assert_eq!(ZIndex(i32::MAX).above(), ZIndex(i32::MAX));
        assert_eq!(ZIndex::BASE.above(), ZIndex(1));
    }
}
