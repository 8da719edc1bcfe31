//! Placement legality rules for the colored Tower of Hanoi

use super::Disk;

/// Placement rules engine
pub struct PlacementRules;

impl PlacementRules {
    /// Check whether `disk` may be placed on top of `peg` (top = last element).
    ///
    /// An empty peg accepts anything. Otherwise the disk must not be larger
    /// than the current top (equal sizes may stack) and must not share its
    /// color with the current top, regardless of the size relation.
    pub fn can_place(disk: Disk, peg: &[Disk]) -> bool {
        match peg.last() {
            None => true,
            Some(top) => disk.size <= top.size && disk.color != top.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hanoi::ColorId;

    fn disk(size: u32, color: u32) -> Disk {
        Disk {
            size,
            color: ColorId(color),
        }
    }

    #[test]
    fn test_empty_peg_accepts_anything() {
        assert!(PlacementRules::can_place(disk(9, 0), &[]));
    }

    #[test]
    fn test_larger_disk_rejected() {
        let peg = vec![disk(2, 0)];
        assert!(!PlacementRules::can_place(disk(3, 1), &peg));
    }

    #[test]
    fn test_equal_size_allowed_when_colors_differ() {
        let peg = vec![disk(2, 0)];
        assert!(PlacementRules::can_place(disk(2, 1), &peg));
    }

    #[test]
    fn test_same_color_rejected_even_when_smaller() {
        let peg = vec![disk(3, 0)];
        assert!(!PlacementRules::can_place(disk(1, 0), &peg));
    }

    #[test]
    fn test_smaller_different_color_allowed() {
        let peg = vec![disk(3, 0)];
        assert!(PlacementRules::can_place(disk(2, 1), &peg));
    }

    #[test]
    fn test_only_top_of_peg_matters() {
        // Same color as a buried disk is fine
        let peg = vec![disk(3, 0), disk(2, 1)];
        assert!(PlacementRules::can_place(disk(1, 0), &peg));
    }
}
