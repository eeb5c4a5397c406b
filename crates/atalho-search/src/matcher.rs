#![forbid(unsafe_code)]

//! Field-priority ranking over resolved documents.
//!
//! [`Matcher::rank`] scores a free-text query against every resolved
//! document and returns hits sorted by ascending distance. Matchable
//! fields, in priority order: title, description, tags. The lowest-distance
//! field represents its document; on equal distance the higher-priority
//! field wins. Sorting is stable, so equal-distance documents keep catalog
//! order and identical inputs always produce the identical result list.
//!
//! An empty (or whitespace-only) query yields an empty result list — the
//! palette shell shows its popular-term fallback instead of flashing the
//! whole catalog. No matches also yields an empty list; presenting a "no
//! results" state is the shell's job.

use std::fmt;

use tracing::trace;

use crate::document::ResolvedDocument;
use crate::normalize::fold;
use crate::scorer::{FuzzyScore, SubstringDistance};

// ---------------------------------------------------------------------------
// Field Kind
// ---------------------------------------------------------------------------

/// Which field of a document produced its best match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Display title.
    Title,
    /// Display description.
    Description,
    /// One of the hidden keyword tags.
    Tag,
}

impl FieldKind {
    /// Priority rank; lower wins ties between fields of one document.
    const fn rank(self) -> u8 {
        match self {
            Self::Title => 0,
            Self::Description => 1,
            Self::Tag => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Search Hit
// ---------------------------------------------------------------------------

/// One ranked result, valid for the lifetime of a single query's result
/// set.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Index into the resolved-document slice the query ran against.
    pub doc_index: usize,
    /// Edit distance of the best field match (lower is better).
    pub distance: u32,
    /// Field that produced the best match.
    pub field: FieldKind,
    /// Char positions of the matched run in the winning field's folded
    /// text (for highlighting). Empty for tag matches.
    pub positions: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Ranks resolved documents against a query via a pluggable scorer.
pub struct Matcher {
    scorer: Box<dyn FuzzyScore>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

impl Matcher {
    /// Matcher with the default bounded-distance scorer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scorer: Box::new(SubstringDistance::new()),
        }
    }

    /// Matcher with a custom scoring strategy.
    #[must_use]
    pub fn with_scorer(scorer: impl FuzzyScore + 'static) -> Self {
        Self {
            scorer: Box::new(scorer),
        }
    }

    /// Rank `documents` against `query`.
    ///
    /// The returned hits reference `documents` by index and are sorted by
    /// ascending distance; ties keep catalog order.
    #[must_use]
    pub fn rank(&self, query: &str, documents: &[ResolvedDocument]) -> Vec<SearchHit> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let folded_query = fold(trimmed);

        let mut hits: Vec<SearchHit> = documents
            .iter()
            .enumerate()
            .filter_map(|(doc_index, doc)| {
                self.best_field(&folded_query, doc)
                    .map(|(distance, field)| SearchHit {
                        doc_index,
                        distance,
                        field,
                        positions: self.winning_positions(&folded_query, doc, field),
                    })
            })
            .collect();

        hits.sort_by_key(|hit| hit.distance);
        trace!(
            query = trimmed,
            candidates = documents.len(),
            hits = hits.len(),
            "ranked query"
        );
        hits
    }

    /// Best (distance, field) for one document, honoring field priority.
    fn best_field(&self, folded_query: &str, doc: &ResolvedDocument) -> Option<(u32, FieldKind)> {
        let mut best: Option<(u32, FieldKind)> = None;

        let mut consider = |distance: Option<u32>, field: FieldKind| {
            if let Some(distance) = distance {
                let better = match best {
                    None => true,
                    Some((best_distance, best_kind)) => {
                        (distance, field.rank()) < (best_distance, best_kind.rank())
                    }
                };
                if better {
                    best = Some((distance, field));
                }
            }
        };

        consider(
            self.scorer.score(folded_query, &doc.folded_title),
            FieldKind::Title,
        );
        consider(
            self.scorer.score(folded_query, &doc.folded_description),
            FieldKind::Description,
        );
        for tag in &doc.folded_tags {
            consider(self.scorer.score(folded_query, tag), FieldKind::Tag);
        }

        best
    }

    /// Highlight positions for the winning field. Tags are never displayed,
    /// so tag wins carry no positions.
    fn winning_positions(
        &self,
        folded_query: &str,
        doc: &ResolvedDocument,
        field: FieldKind,
    ) -> Vec<usize> {
        let text = match field {
            FieldKind::Title => &doc.folded_title,
            FieldKind::Description => &doc.folded_description,
            FieldKind::Tag => return Vec::new(),
        };
        self.scorer
            .score_with_positions(folded_query, text)
            .map(|(_, positions)| positions)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocType, SearchDocument};

    fn doc(id: &str, title: &str, description: &str, tags: &[&str]) -> ResolvedDocument {
        let document = SearchDocument::new(
            id,
            format!("{id}.title"),
            format!("{id}.description"),
            DocType::Page,
            format!("/{id}"),
        )
        .with_tags(tags.iter().copied());
        ResolvedDocument::new(document, title, description)
    }

    fn corpus() -> Vec<ResolvedDocument> {
        vec![
            doc("home-contact", "Contact", "Get in touch", &["contato", "email"]),
            doc("guide-ai-tips", "AI Tips", "Working with AI tools", &["ai", "dicas"]),
            doc(
                "tool-json",
                "JSON Formatter",
                "Format and validate JSON",
                &["json", "formatter"],
            ),
        ]
    }

    #[test]
    fn empty_query_returns_no_hits() {
        let matcher = Matcher::new();
        assert!(matcher.rank("", &corpus()).is_empty());
        assert!(matcher.rank("   ", &corpus()).is_empty());
    }

    #[test]
    fn exact_title_match_ranks_first() {
        let matcher = Matcher::new();
        let hits = matcher.rank("contact", &corpus());
        assert!(!hits.is_empty());
        assert_eq!(hits[0].doc_index, 0);
        assert_eq!(hits[0].distance, 0);
        assert_eq!(hits[0].field, FieldKind::Title);
    }

    #[test]
    fn typo_still_matches() {
        let matcher = Matcher::new();
        let hits = matcher.rank("contct", &corpus());
        assert_eq!(hits.first().map(|h| h.doc_index), Some(0));
    }

    #[test]
    fn tag_widens_the_matchable_surface() {
        let matcher = Matcher::new();
        let hits = matcher.rank("contato", &corpus());
        let top = hits.first().expect("tag should match");
        assert_eq!(top.doc_index, 0);
        assert_eq!(top.field, FieldKind::Tag);
        assert!(top.positions.is_empty());
    }

    #[test]
    fn title_beats_tag_on_equal_distance() {
        let matcher = Matcher::new();
        let documents = vec![doc("x", "json", "", &["json"])];
        let hits = matcher.rank("json", &documents);
        assert_eq!(hits[0].field, FieldKind::Title);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let matcher = Matcher::new();
        assert!(matcher.rank("zzz-no-match", &corpus()).is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let matcher = Matcher::new();
        let documents = vec![
            doc("first", "Terminal", "", &[]),
            doc("second", "Terminal", "", &[]),
        ];
        let hits = matcher.rank("terminal", &documents);
        assert_eq!(
            hits.iter().map(|h| h.doc_index).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn diacritics_insensitive_both_ways() {
        let matcher = Matcher::new();
        let documents = vec![doc("pub", "Publicação", "", &[])];
        assert!(!matcher.rank("publicacao", &documents).is_empty());
        assert!(!matcher.rank("PUBLICAÇÃO", &documents).is_empty());
    }

    #[test]
    fn deterministic_result_order() {
        let matcher = Matcher::new();
        let documents = corpus();
        let first: Vec<_> = matcher
            .rank("ai", &documents)
            .iter()
            .map(|h| (h.doc_index, h.distance))
            .collect();
        for _ in 0..10 {
            let again: Vec<_> = matcher
                .rank("ai", &documents)
                .iter()
                .map(|h| (h.doc_index, h.distance))
                .collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn title_positions_reported_for_highlight() {
        let matcher = Matcher::new();
        let hits = matcher.rank("formatter", &corpus());
        let top = hits.first().expect("formatter should match");
        assert_eq!(top.field, FieldKind::Title);
        assert!(!top.positions.is_empty());
    }
}
