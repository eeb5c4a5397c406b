#![forbid(unsafe_code)]

//! Bounded-distance fuzzy scoring.
//!
//! The scoring contract is a narrow strategy interface, [`FuzzyScore`]:
//! given an already-folded query and field, report the edit distance of the
//! best approximate occurrence, or `None` when no occurrence fits the
//! distance budget. Controllers upstream never see how the distance is
//! computed, so the default implementation can be swapped for a bitap or a
//! third-party matcher without touching them.
//!
//! The default strategy, [`SubstringDistance`], runs the classic
//! approximate-substring dynamic program: edit distance where the match may
//! begin at any column of the field for free. Location independence falls
//! out of the recurrence — `"contact"` buried at the end of a long title
//! costs exactly what it costs at the start. The distance budget adapts to
//! query length so short queries stay strict while longer ones tolerate a
//! typo or two.
//!
//! # Invariants
//!
//! 1. Determinism: same (query, field) → same result, always.
//! 2. `score(q, f) == Some(0)` iff `f` contains `q` as an exact substring
//!    (for non-empty `q`).
//! 3. Reported distance never exceeds the budget for the query's length.

use smallvec::SmallVec;

/// Inline capacity for DP rows; queries longer than this spill to the heap.
const ROW_INLINE: usize = 32;

type Row = SmallVec<[u32; ROW_INLINE]>;

// ---------------------------------------------------------------------------
// Strategy interface
// ---------------------------------------------------------------------------

/// Scoring strategy: distance of the best in-budget approximate occurrence.
///
/// Both arguments are expected pre-folded (see [`crate::normalize::fold`]);
/// implementations must not re-normalize. An empty query never matches —
/// empty-query handling belongs to the matcher, not the scorer.
pub trait FuzzyScore {
    /// Edit distance of the best occurrence of `query` in `field`, or
    /// `None` when nothing fits the budget.
    fn score(&self, query: &str, field: &str) -> Option<u32>;

    /// Like [`FuzzyScore::score`], additionally reporting the char
    /// positions of the matched run in `field` (for highlighting).
    ///
    /// The default forwards to `score` with no positions; strategies that
    /// can reconstruct the alignment should override it.
    fn score_with_positions(&self, query: &str, field: &str) -> Option<(u32, Vec<usize>)> {
        self.score(query, field).map(|d| (d, Vec::new()))
    }
}

// ---------------------------------------------------------------------------
// Distance budget
// ---------------------------------------------------------------------------

/// Maximum edit distance allowed for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceLimit {
    /// Budget grows with query length: 0 edits for 1–2 chars, 1 for 3–5,
    /// 2 for 6 and up.
    #[default]
    Adaptive,
    /// Fixed budget regardless of query length.
    Fixed(u32),
}

impl DistanceLimit {
    /// Budget for a query of `len` chars.
    #[must_use]
    pub const fn budget(self, len: usize) -> u32 {
        match self {
            Self::Adaptive => match len {
                0..=2 => 0,
                3..=5 => 1,
                _ => 2,
            },
            Self::Fixed(max) => max,
        }
    }
}

// ---------------------------------------------------------------------------
// Substring distance
// ---------------------------------------------------------------------------

/// Approximate-substring scorer (free start column, bounded edits).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringDistance {
    limit: DistanceLimit,
}

impl SubstringDistance {
    /// Scorer with the adaptive budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with an explicit distance limit.
    #[must_use]
    pub const fn with_limit(limit: DistanceLimit) -> Self {
        Self { limit }
    }

    /// The configured limit.
    #[must_use]
    pub const fn limit(&self) -> DistanceLimit {
        self.limit
    }
}

impl FuzzyScore for SubstringDistance {
    fn score(&self, query: &str, field: &str) -> Option<u32> {
        let query: Vec<char> = query.chars().collect();
        if query.is_empty() {
            return None;
        }
        let budget = self.limit.budget(query.len());
        let field_len = field.chars().count();

        // A field shorter than the query by more than the budget cannot
        // absorb the missing chars.
        if query.len() > field_len + budget as usize {
            return None;
        }

        // Rolling two-row DP. prev[i] = cost of matching the first i query
        // chars ending anywhere in the field processed so far; column 0 is
        // free (the occurrence may start at any position).
        let m = query.len();
        let mut prev: Row = (0..=m as u32).collect();
        let mut curr: Row = SmallVec::from_elem(0, m + 1);
        let mut best = prev[m];

        for fc in field.chars() {
            curr[0] = 0;
            for (i, &qc) in query.iter().enumerate() {
                let substitution = prev[i] + u32::from(qc != fc);
                let deletion = prev[i + 1] + 1;
                let insertion = curr[i] + 1;
                curr[i + 1] = substitution.min(deletion).min(insertion);
            }
            best = best.min(curr[m]);
            std::mem::swap(&mut prev, &mut curr);
        }

        (best <= budget).then_some(best)
    }

    fn score_with_positions(&self, query: &str, field: &str) -> Option<(u32, Vec<usize>)> {
        let query: Vec<char> = query.chars().collect();
        if query.is_empty() {
            return None;
        }
        let budget = self.limit.budget(query.len());
        let field_chars: Vec<char> = field.chars().collect();
        if query.len() > field_chars.len() + budget as usize {
            return None;
        }

        // Full matrix for traceback. Fields here are short display strings,
        // so the O(m·n) table stays small.
        let m = query.len();
        let n = field_chars.len();
        let width = n + 1;
        let mut dp = vec![0u32; (m + 1) * width];
        for i in 0..=m {
            dp[i * width] = i as u32;
        }

        for (j, &fc) in field_chars.iter().enumerate() {
            for (i, &qc) in query.iter().enumerate() {
                let substitution = dp[i * width + j] + u32::from(qc != fc);
                let deletion = dp[i * width + j + 1] + 1;
                let insertion = dp[(i + 1) * width + j] + 1;
                dp[(i + 1) * width + j + 1] = substitution.min(deletion).min(insertion);
            }
        }

        // Best end column of the occurrence; earlier columns win ties so
        // highlighting is deterministic.
        let (mut j, &best) = dp[m * width..]
            .iter()
            .enumerate()
            .min_by_key(|&(j, &d)| (d, j))?;
        if best > budget {
            return None;
        }

        // Walk the alignment back, collecting field columns consumed by a
        // match or substitution.
        let mut positions = Vec::with_capacity(m);
        let mut i = m;
        while i > 0 && j > 0 {
            let here = dp[i * width + j];
            let diag = dp[(i - 1) * width + j - 1];
            if here == diag + u32::from(query[i - 1] != field_chars[j - 1]) {
                if query[i - 1] == field_chars[j - 1] {
                    positions.push(j - 1);
                }
                i -= 1;
                j -= 1;
            } else if here == dp[(i - 1) * width + j] + 1 {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        positions.reverse();
        Some((best, positions))
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A query embedded verbatim in a field always scores zero.
        #[test]
        fn embedded_substring_scores_zero(
            prefix in "[a-z ]{0,12}",
            query in "[a-z]{1,10}",
            suffix in "[a-z ]{0,12}",
        ) {
            let field = format!("{prefix}{query}{suffix}");
            prop_assert_eq!(
                SubstringDistance::new().score(&query, &field),
                Some(0)
            );
        }

        /// Reported distance never exceeds the budget for the query length.
        #[test]
        fn distance_stays_within_budget(
            query in "[a-z]{1,12}",
            field in "[a-z ]{0,40}",
        ) {
            let scorer = SubstringDistance::new();
            if let Some(distance) = scorer.score(&query, &field) {
                let budget = DistanceLimit::Adaptive.budget(query.chars().count());
                prop_assert!(distance <= budget);
            }
        }

        /// Scoring is a pure function of its inputs.
        #[test]
        fn scoring_is_deterministic(
            query in "[a-z]{1,8}",
            field in "[a-z ]{0,30}",
        ) {
            let scorer = SubstringDistance::new();
            prop_assert_eq!(scorer.score(&query, &field), scorer.score(&query, &field));
        }
    }
}
