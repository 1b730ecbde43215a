//! The sequence generation algorithm.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PageNumber, SequenceError, SequenceResult, Token};

/// The four inputs of a generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceParams {
    /// Current page (1-based)
    pub cur_page: PageNumber,

    /// Total number of pages
    pub num_pages: PageNumber,

    /// Pages always shown at the start and at the end
    pub num_pages_at_edges: PageNumber,

    /// Pages shown on each side of the current page
    pub num_pages_around_current: PageNumber,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            cur_page: 1,
            num_pages: 50,
            num_pages_at_edges: 2,
            num_pages_around_current: 2,
        }
    }
}

impl SequenceParams {
    pub fn validate(&self) -> SequenceResult<()> {
        validate(
            self.cur_page,
            self.num_pages,
            self.num_pages_at_edges,
            self.num_pages_around_current,
        )
    }

    pub fn generate(&self) -> SequenceResult<Vec<Token>> {
        generate(
            self.cur_page,
            self.num_pages,
            self.num_pages_at_edges,
            self.num_pages_around_current,
        )
    }
}

/// Check generation inputs without generating anything.
///
/// An out-of-range current page is rejected rather than clamped. With zero
/// pages any current page is accepted and the sequence is empty.
pub fn validate(
    cur_page: PageNumber,
    num_pages: PageNumber,
    num_pages_at_edges: PageNumber,
    num_pages_around_current: PageNumber,
) -> SequenceResult<()> {
    if num_pages < 0 {
        return Err(SequenceError::NegativePageCount(num_pages));
    }

    if num_pages_at_edges < 0 {
        return Err(SequenceError::NegativeContext {
            parameter: "numPagesAtEdges",
            value: num_pages_at_edges,
        });
    }

    if num_pages_around_current < 0 {
        return Err(SequenceError::NegativeContext {
            parameter: "numPagesAroundCurrent",
            value: num_pages_around_current,
        });
    }

    if num_pages >= 1 && !(1..=num_pages).contains(&cur_page) {
        return Err(SequenceError::CurrentPageOutOfRange {
            current: cur_page,
            total: num_pages,
        });
    }

    Ok(())
}

/// Generate the pagination sequence for the given page and context sizes.
///
/// The shown pages are the union of the leading edge `1..=edges`, the
/// trailing edge `(num_pages - edges + 1)..=num_pages` and the window
/// `(cur_page - around)..=(cur_page + around)`, all clipped to the page range.
/// Runs that are not contiguous are separated by a single [`Token::Ellipsis`].
///
/// ```
/// use pagination_sequence::sequence::{format_sequence, generate};
///
/// let sequence = generate(5, 10, 2, 1).unwrap();
/// assert_eq!(format_sequence(&sequence), "[1,2,…,4,5,6,…,9,10]");
/// ```
pub fn generate(
    cur_page: PageNumber,
    num_pages: PageNumber,
    num_pages_at_edges: PageNumber,
    num_pages_around_current: PageNumber,
) -> SequenceResult<Vec<Token>> {
    validate(
        cur_page,
        num_pages,
        num_pages_at_edges,
        num_pages_around_current,
    )?;

    if num_pages == 0 {
        return Ok(Vec::new());
    }

    let mut ranges: Vec<(PageNumber, PageNumber)> = [
        clip(1, num_pages_at_edges, num_pages),
        clip(
            num_pages
                .saturating_sub(num_pages_at_edges)
                .saturating_add(1),
            num_pages,
            num_pages,
        ),
        clip(
            cur_page.saturating_sub(num_pages_around_current),
            cur_page.saturating_add(num_pages_around_current),
            num_pages,
        ),
    ]
    .into_iter()
    .flatten()
    .collect();
    ranges.sort_unstable();

    // Overlapping or touching ranges form one contiguous run
    let mut runs: Vec<(PageNumber, PageNumber)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match runs.last_mut() {
            Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
            _ => runs.push((start, end)),
        }
    }

    let mut sequence = Vec::new();
    for (index, (start, end)) in runs.iter().enumerate() {
        if index > 0 {
            sequence.push(Token::Ellipsis);
        }
        sequence.extend((*start..=*end).map(Token::Page));
    }

    debug!(
        cur_page,
        num_pages,
        num_pages_at_edges,
        num_pages_around_current,
        runs = runs.len(),
        tokens = sequence.len(),
        "Generated pagination sequence"
    );

    Ok(sequence)
}

fn clip(
    start: PageNumber,
    end: PageNumber,
    num_pages: PageNumber,
) -> Option<(PageNumber, PageNumber)> {
    let start = start.max(1);
    let end = end.min(num_pages);
    (start <= end).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::format_sequence;

    fn seq(cur: i64, num: i64, edges: i64, around: i64) -> String {
        format_sequence(&generate(cur, num, edges, around).unwrap())
    }

    /// Every valid input combination over a small range
    fn all_valid_inputs() -> Vec<(i64, i64, i64, i64)> {
        let mut inputs = Vec::new();
        for num in 1..=14 {
            for cur in 1..=num {
                for edges in 0..=4 {
                    for around in 0..=4 {
                        inputs.push((cur, num, edges, around));
                    }
                }
            }
        }
        inputs
    }

    #[test]
    fn test_known_scenarios() {
        assert_eq!(seq(1, 1, 2, 2), "[1]");
        assert_eq!(seq(5, 10, 2, 1), "[1,2,…,4,5,6,…,9,10]");
        assert_eq!(seq(1, 10, 2, 2), "[1,2,3,…,9,10]");
        assert_eq!(seq(10, 10, 0, 0), "[10]");
        assert_eq!(seq(5, 5, 2, 2), "[1,2,3,4,5]");
    }

    #[test]
    fn test_no_context_is_just_current_page() {
        assert_eq!(seq(7, 20, 0, 0), "[7]");
        assert_eq!(seq(1, 20, 0, 0), "[1]");
    }

    #[test]
    fn test_single_page_ignores_context() {
        for edges in 0..=3 {
            for around in 0..=3 {
                assert_eq!(seq(1, 1, edges, around), "[1]");
            }
        }
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert!(generate(1, 0, 2, 2).unwrap().is_empty());
        assert!(generate(0, 0, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_edges_without_window_reaching_them() {
        // No forced inclusion of the boundary pages when there are no edges
        assert_eq!(seq(10, 20, 0, 2), "[8,9,10,11,12]");
        assert_eq!(seq(10, 20, 1, 0), "[1,…,10,…,20]");
    }

    #[test]
    fn test_adjacent_ranges_merge() {
        // Window 3..=7 touches the leading edge 1..=2
        assert_eq!(seq(5, 20, 2, 2), "[1,2,3,4,5,6,7,…,19,20]");
        // Window 14..=16 touches the trailing edge 17..=18 but not the leading one
        assert_eq!(seq(15, 18, 2, 1), "[1,2,…,14,15,16,17,18]");
    }

    #[test]
    fn test_single_hidden_page_still_collapses() {
        // Page 3 is the only hidden page between 1..=2 and 4..=6
        assert_eq!(seq(5, 10, 2, 1), "[1,2,…,4,5,6,…,9,10]");
    }

    #[test]
    fn test_large_page_counts() {
        let sequence = generate(500_000_000, 1_000_000_000, 1, 1).unwrap();
        assert_eq!(
            format_sequence(&sequence),
            "[1,…,499999999,500000000,500000001,…,1000000000]"
        );

        let sequence = generate(i64::MAX, i64::MAX, 1, 2).unwrap();
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.last(), Some(&Token::Page(i64::MAX)));
    }

    #[test]
    fn test_monotonic_pages() {
        for (cur, num, edges, around) in all_valid_inputs() {
            let pages: Vec<i64> = generate(cur, num, edges, around)
                .unwrap()
                .iter()
                .filter_map(Token::page)
                .collect();
            assert!(
                pages.windows(2).all(|w| w[0] < w[1]),
                "not increasing for {:?}: {:?}",
                (cur, num, edges, around),
                pages
            );
        }
    }

    #[test]
    fn test_ellipsis_placement() {
        for (cur, num, edges, around) in all_valid_inputs() {
            let sequence = generate(cur, num, edges, around).unwrap();
            assert!(!sequence.first().unwrap().is_ellipsis());
            assert!(!sequence.last().unwrap().is_ellipsis());
            assert!(sequence
                .windows(2)
                .all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())));
        }
    }

    #[test]
    fn test_gap_implies_ellipsis() {
        for (cur, num, edges, around) in all_valid_inputs() {
            let sequence = generate(cur, num, edges, around).unwrap();
            let mut previous: Option<i64> = None;
            let mut gap_marked = false;
            for token in &sequence {
                match token {
                    Token::Ellipsis => gap_marked = true,
                    Token::Page(page) => {
                        if let Some(prev) = previous {
                            assert_eq!(
                                page - prev > 1,
                                gap_marked,
                                "gap between {} and {} for {:?}",
                                prev,
                                page,
                                (cur, num, edges, around)
                            );
                        }
                        previous = Some(*page);
                        gap_marked = false;
                    }
                }
            }
        }
    }

    #[test]
    fn test_edge_inclusion() {
        for (cur, num, edges, around) in all_valid_inputs() {
            if edges == 0 {
                continue;
            }
            let sequence = generate(cur, num, edges, around).unwrap();
            assert!(sequence.contains(&Token::Page(1)));
            assert!(sequence.contains(&Token::Page(num)));
        }
    }

    #[test]
    fn test_current_page_always_shown() {
        for (cur, num, edges, around) in all_valid_inputs() {
            let sequence = generate(cur, num, edges, around).unwrap();
            assert!(sequence.contains(&Token::Page(cur)));
        }
    }

    #[test]
    fn test_idempotent() {
        let first = generate(17, 40, 2, 3).unwrap();
        let second = generate(17, 40, 2, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_negative_page_count() {
        let err = generate(1, -1, 2, 2).unwrap_err();
        assert_eq!(err, SequenceError::NegativePageCount(-1));
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_rejects_current_page_out_of_range() {
        let err = generate(11, 10, 2, 2).unwrap_err();
        assert_eq!(
            err,
            SequenceError::CurrentPageOutOfRange {
                current: 11,
                total: 10
            }
        );
        assert!(generate(0, 10, 2, 2).is_err());
        assert!(generate(-3, 10, 2, 2).is_err());
    }

    #[test]
    fn test_rejects_negative_context() {
        let err = generate(1, 10, -1, 2).unwrap_err();
        assert_eq!(
            err,
            SequenceError::NegativeContext {
                parameter: "numPagesAtEdges",
                value: -1
            }
        );
        assert!(!err.is_invalid_range());

        let err = generate(1, 10, 2, -2).unwrap_err();
        assert!(err.to_string().contains("numPagesAroundCurrent"));
    }

    #[test]
    fn test_params_generate() {
        let params = SequenceParams {
            cur_page: 5,
            num_pages: 10,
            num_pages_at_edges: 2,
            num_pages_around_current: 1,
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.generate().unwrap(), generate(5, 10, 2, 1).unwrap());
        assert!(SequenceParams::default().validate().is_ok());
    }
}
