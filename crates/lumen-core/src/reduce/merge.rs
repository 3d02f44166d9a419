// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Block-ordered merge of partial maxima.

use super::kernel::BrightnessResult;
use super::partition::RowRange;

/// One worker's answer, tagged with the block it was dispatched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartialMax {
    /// Dispatch index of the block (position in the partition).
    pub block: usize,
    /// Rows the worker scanned.
    pub range: RowRange,
    /// Maximal cell within `range`.
    pub result: BrightnessResult,
}

/// Merges partial maxima into the global maximum.
///
/// # Algorithm
///
/// 1. Order partials by `block` (dispatch order), never by arrival order.
/// 2. Walk them keeping the result with the strictly greater value.
///
/// Blocks are contiguous and ordered by row, so keeping the earlier block on
/// ties yields the row-major first occurrence over the whole grid.
///
/// Returns `None` when `partials` is empty.
pub fn merge_partials(partials: &[PartialMax]) -> Option<BrightnessResult> {
    let mut ordered: Vec<&PartialMax> = partials.iter().collect();
    ordered.sort_by_key(|p| p.block);

    let mut iter = ordered.into_iter();
    let first = iter.next()?.result;
    Some(iter.fold(first, |best, partial| {
        if partial.result.value > best.value {
            partial.result
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(block: usize, start: usize, end: usize, value: u32, row: usize, col: usize) -> PartialMax {
        PartialMax {
            block,
            range: RowRange::new(start, end),
            result: BrightnessResult::new(value, row, col),
        }
    }

    #[test]
    fn empty_merges_to_none() {
        assert_eq!(merge_partials(&[]), None);
    }

    #[test]
    fn strictly_greater_wins() {
        let partials = [
            partial(0, 0, 2, 10, 1, 3),
            partial(1, 2, 4, 12, 2, 0),
            partial(2, 4, 6, 11, 5, 5),
        ];
        assert_eq!(
            merge_partials(&partials),
            Some(BrightnessResult::new(12, 2, 0))
        );
    }

    #[test]
    fn tie_keeps_earlier_block() {
        let partials = [partial(0, 0, 1, 7, 0, 1), partial(1, 1, 2, 7, 1, 0)];
        assert_eq!(
            merge_partials(&partials),
            Some(BrightnessResult::new(7, 0, 1))
        );
    }

    #[test]
    fn arrival_order_does_not_matter() {
        // Later block delivered first; tie must still resolve to block 0.
        let partials = [
            partial(2, 4, 6, 9, 4, 0),
            partial(0, 0, 2, 9, 1, 2),
            partial(1, 2, 4, 3, 2, 2),
        ];
        assert_eq!(
            merge_partials(&partials),
            Some(BrightnessResult::new(9, 1, 2))
        );
    }
}
