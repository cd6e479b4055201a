// LogSift - core/splitter.rs
//
// Even partitioning of a log into contiguous chunks. Blank lines are dropped
// first; every remaining line lands in exactly one chunk.

use crate::util::constants;
use crate::util::error::ValidationError;
use std::ops::Range;

/// One contiguous slice of the filtered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// 1-based position of the chunk, used in the output file name.
    pub ordinal: usize,

    pub lines: &'a [&'a str],
}

/// The full partition of a line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan<'a> {
    /// Lines considered (blank lines excluded).
    pub total_lines: usize,

    /// Target size of every chunk but the last.
    pub lines_per_chunk: usize,

    /// Non-empty chunks in order.
    pub chunks: Vec<Chunk<'a>>,

    /// Ordinals whose start offset fell past the end and were not produced.
    /// Always a trailing run, so it is kept as a range.
    pub skipped: Range<usize>,
}

impl ChunkPlan<'_> {
    /// Sum of lines across all produced chunks.
    pub fn lines_assigned(&self) -> usize {
        self.chunks.iter().map(|c| c.lines.len()).sum()
    }

    /// True when every filtered line was assigned to a chunk.
    pub fn is_reconciled(&self) -> bool {
        self.lines_assigned() == self.total_lines
    }
}

/// Reject a chunk count of zero or above `ABSOLUTE_MAX_SPLIT_PARTS`.
pub fn validate_parts(parts: usize) -> Result<(), ValidationError> {
    if parts == 0 {
        return Err(ValidationError::ZeroParts);
    }
    if parts > constants::ABSOLUTE_MAX_SPLIT_PARTS {
        return Err(ValidationError::OutOfRange {
            field: "parts",
            value: parts,
            max: constants::ABSOLUTE_MAX_SPLIT_PARTS,
        });
    }
    Ok(())
}

/// Partition `lines` into at most `parts` contiguous chunks of
/// `ceil(total / parts)` lines. `lines` must already be free of blank lines
/// (see `scanner::non_blank_lines`).
pub fn split<'a>(lines: &'a [&'a str], parts: usize) -> Result<ChunkPlan<'a>, ValidationError> {
    validate_parts(parts)?;
    let total = lines.len();
    let per_chunk = total.div_ceil(parts);

    let chunks: Vec<Chunk<'a>> = if per_chunk == 0 {
        Vec::new()
    } else {
        lines
            .chunks(per_chunk)
            .enumerate()
            .map(|(i, slice)| Chunk {
                ordinal: i + 1,
                lines: slice,
            })
            .collect()
    };

    Ok(ChunkPlan {
        total_lines: total,
        lines_per_chunk: per_chunk,
        skipped: chunks.len() + 1..parts + 1,
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::non_blank_lines;

    fn sizes(plan: &ChunkPlan<'_>) -> Vec<usize> {
        plan.chunks.iter().map(|c| c.lines.len()).collect()
    }

    #[test]
    fn test_five_lines_three_parts() {
        let lines = ["a", "b", "c", "d", "e"];
        let plan = split(&lines, 3).unwrap();
        assert_eq!(sizes(&plan), vec![2, 2, 1]);
        assert_eq!(plan.lines_per_chunk, 2);

        let rebuilt: Vec<&str> = plan.chunks.iter().flat_map(|c| c.lines.iter().copied()).collect();
        assert_eq!(rebuilt, lines);
        assert!(plan.is_reconciled());
        assert_eq!(plan.lines_assigned(), 5);
    }

    #[test]
    fn test_trailing_chunks_skipped_not_empty() {
        // ceil(4/3) = 2 -> [2, 2], the third chunk would start at offset 4.
        let lines = ["a", "b", "c", "d"];
        let plan = split(&lines, 3).unwrap();
        assert_eq!(sizes(&plan), vec![2, 2]);
        assert_eq!(plan.skipped, 3..4);
        assert!(plan.is_reconciled());
    }

    #[test]
    fn test_more_parts_than_lines() {
        let lines = ["a", "b"];
        let plan = split(&lines, 5).unwrap();
        assert_eq!(sizes(&plan), vec![1, 1]);
        assert_eq!(plan.skipped, 3..6);
        assert_eq!(plan.chunks[1].ordinal, 2);
    }

    #[test]
    fn test_blank_lines_filtered_before_split() {
        let lines = non_blank_lines("a\n\n b\n  \nc\n");
        let plan = split(&lines, 2).unwrap();
        assert_eq!(plan.total_lines, 3);
        assert_eq!(plan.chunks[0].lines, ["a", " b"]);
        assert_eq!(plan.chunks[1].lines, ["c"]);
    }

    #[test]
    fn test_empty_input_has_no_chunks() {
        let plan = split(&[], 3).unwrap();
        assert!(plan.chunks.is_empty());
        assert_eq!(plan.skipped, 1..4);
        assert!(plan.is_reconciled());
    }

    #[test]
    fn test_zero_parts_rejected() {
        assert_eq!(split(&["a"], 0), Err(ValidationError::ZeroParts));
    }

    #[test]
    fn test_parts_above_limit_rejected() {
        let too_many = constants::ABSOLUTE_MAX_SPLIT_PARTS + 1;
        assert!(matches!(
            split(&["a"], too_many),
            Err(ValidationError::OutOfRange { field: "parts", .. })
        ));
        assert!(matches!(split(&["a"], usize::MAX), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_many_parts_on_small_input_stays_compact() {
        let plan = split(&["a"], constants::ABSOLUTE_MAX_SPLIT_PARTS).unwrap();
        assert_eq!(plan.chunks.len(), 1);
        assert_eq!(plan.skipped, 2..constants::ABSOLUTE_MAX_SPLIT_PARTS + 1);
        assert_eq!(plan.skipped.len(), constants::ABSOLUTE_MAX_SPLIT_PARTS - 1);
    }

    #[test]
    fn test_reconciles_for_many_sizes() {
        let pool: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = pool.iter().map(String::as_str).collect();
        for total in 0..=refs.len() {
            for parts in 1..=12 {
                let plan = split(&refs[..total], parts).unwrap();
                assert!(plan.is_reconciled(), "total={total} parts={parts}");
                assert!(plan.chunks.len() <= parts);
                assert_eq!(plan.chunks.len() + plan.skipped.len(), parts);
                let rebuilt: Vec<&str> =
                    plan.chunks.iter().flat_map(|c| c.lines.iter().copied()).collect();
                assert_eq!(rebuilt, &refs[..total]);
            }
        }
    }
}
