//! Episode label normalization and ordering.
//!
//! Upstream episode numbers arrive as loosely-structured strings: plain
//! integers ("195"), underscore-suffixed variants ("195_1", "195_end"),
//! dash-joined ranges ("195-196-197"), and free-form annotations
//! ("195_special"). Labels sort by their integer base first, then by
//! annotation kind: plain, numeric suffixes ascending, ranges and other
//! annotations, "_end" last. Where a range label falls relative to another
//! annotated label with the same base is decided by a plain lexical
//! comparison of the labels — a compatibility quirk kept from the upstream
//! catalog rather than a deliberate rule.

use super::patterns::PATTERNS;
use std::cmp::Ordering;

/// Annotation kind of an episode label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeKind {
    /// Bare number, e.g. "195"
    Plain,
    /// Underscore followed by digits, e.g. "195_2"
    NumericSuffix(u64),
    /// Underscore followed by anything else, e.g. "195_special"
    OtherSuffix,
    /// Dash-joined multi-episode label, e.g. "195-196-197"
    Range,
    /// Case-insensitive "_end" suffix, marks the last upload for a number
    EndMarker,
}

/// A raw upstream episode label split into its sortable parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEpisode {
    /// Trimmed original label, kept for titles and lexical tie-breaks
    pub label: String,
    /// Leading integer run
    pub base: u64,
    pub kind: EpisodeKind,
}

impl ParsedEpisode {
    /// Parse a raw label. Returns `None` when no leading digit run exists
    /// (or the run does not fit an integer); such labels are dropped from
    /// listings.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let label = raw.trim();
        let base: u64 = PATTERNS
            .leading_digits
            .captures(label)?
            .get(1)?
            .as_str()
            .parse()
            .ok()?;

        // Underscore takes precedence over dash when both appear
        let kind = if let Some(pos) = label.find('_') {
            let suffix = &label[pos..];
            if suffix.eq_ignore_ascii_case("_end") {
                EpisodeKind::EndMarker
            } else if let Some(value) = PATTERNS
                .numeric_suffix
                .captures(suffix)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<u64>().ok())
            {
                EpisodeKind::NumericSuffix(value)
            } else {
                EpisodeKind::OtherSuffix
            }
        } else if label.contains('-') && label.split('-').filter(|s| !s.is_empty()).count() > 1 {
            EpisodeKind::Range
        } else {
            EpisodeKind::Plain
        };

        Some(Self {
            label: label.to_string(),
            base,
            kind,
        })
    }

    /// Display title: plain labels render the bare number, annotated labels
    /// keep the annotation verbatim for the user.
    #[must_use]
    pub fn title(&self) -> String {
        match self.kind {
            EpisodeKind::Plain => format!("Episode {}", self.base),
            _ => format!("Episode {}", self.label),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self.kind {
            EpisodeKind::Plain => 0,
            EpisodeKind::NumericSuffix(_) => 1,
            EpisodeKind::Range | EpisodeKind::OtherSuffix => 2,
            EpisodeKind::EndMarker => 3,
        }
    }

    /// Total order over parsed labels: base ascending, then annotation
    /// rank, then numeric suffix value, then lexical label comparison.
    #[must_use]
    pub fn cmp_order(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| self.kind_rank().cmp(&other.kind_rank()))
            .then_with(|| match (self.kind, other.kind) {
                (EpisodeKind::NumericSuffix(a), EpisodeKind::NumericSuffix(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            })
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Parse and order raw `(label, episode id)` pairs into display order.
/// Labels without a leading digit run are dropped. Exact ties keep their
/// input order.
#[must_use]
pub fn order_labels(entries: Vec<(String, String)>) -> Vec<(ParsedEpisode, String)> {
    let mut parsed: Vec<(ParsedEpisode, String)> = entries
        .into_iter()
        .filter_map(|(raw, id)| ParsedEpisode::parse(&raw).map(|p| (p, id)))
        .collect();

    parsed.sort_by(|a, b| a.0.cmp_order(&b.0));
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let parsed = ParsedEpisode::parse(" 195 ").unwrap();
        assert_eq!(parsed.base, 195);
        assert_eq!(parsed.kind, EpisodeKind::Plain);
        assert_eq!(parsed.label, "195");
        assert_eq!(parsed.title(), "Episode 195");
    }

    #[test]
    fn test_parse_numeric_suffix() {
        let parsed = ParsedEpisode::parse("195_2").unwrap();
        assert_eq!(parsed.base, 195);
        assert_eq!(parsed.kind, EpisodeKind::NumericSuffix(2));
        assert_eq!(parsed.title(), "Episode 195_2");
    }

    #[test]
    fn test_parse_end_marker_case_insensitive() {
        assert_eq!(
            ParsedEpisode::parse("195_end").unwrap().kind,
            EpisodeKind::EndMarker
        );
        assert_eq!(
            ParsedEpisode::parse("195_END").unwrap().kind,
            EpisodeKind::EndMarker
        );
        assert_eq!(
            ParsedEpisode::parse("195_End").unwrap().kind,
            EpisodeKind::EndMarker
        );
    }

    #[test]
    fn test_parse_other_suffix() {
        let parsed = ParsedEpisode::parse("195_special").unwrap();
        assert_eq!(parsed.kind, EpisodeKind::OtherSuffix);
        assert_eq!(parsed.title(), "Episode 195_special");
    }

    #[test]
    fn test_parse_range() {
        let parsed = ParsedEpisode::parse("195-196-197").unwrap();
        assert_eq!(parsed.base, 195);
        assert_eq!(parsed.kind, EpisodeKind::Range);
        assert_eq!(parsed.title(), "Episode 195-196-197");
    }

    #[test]
    fn test_trailing_dash_is_not_a_range() {
        // "195-" splits into a single non-empty segment
        assert_eq!(ParsedEpisode::parse("195-").unwrap().kind, EpisodeKind::Plain);
    }

    #[test]
    fn test_underscore_wins_over_dash() {
        assert_eq!(
            ParsedEpisode::parse("195-196_end").unwrap().kind,
            EpisodeKind::EndMarker
        );
    }

    #[test]
    fn test_parse_rejects_labels_without_leading_digits() {
        assert!(ParsedEpisode::parse("extra").is_none());
        assert!(ParsedEpisode::parse("_1").is_none());
        assert!(ParsedEpisode::parse("").is_none());
    }

    #[test]
    fn test_order_canonical_vector() {
        let entries: Vec<(String, String)> =
            ["196", "195_end", "195-196-197", "195_2", "195", "195_1"]
                .iter()
                .enumerate()
                .map(|(i, label)| ((*label).to_string(), format!("ep{i}")))
                .collect();

        let ordered = order_labels(entries);
        let labels: Vec<&str> = ordered.iter().map(|(p, _)| p.label.as_str()).collect();

        assert_eq!(
            labels,
            vec!["195", "195_1", "195_2", "195-196-197", "195_end", "196"]
        );
    }

    #[test]
    fn test_order_drops_unparseable_labels() {
        let entries = vec![
            ("12".to_string(), "a".to_string()),
            ("PV".to_string(), "b".to_string()),
            ("11".to_string(), "c".to_string()),
        ];

        let ordered = order_labels(entries);

        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].1, "c");
        assert_eq!(ordered[1].1, "a");
    }

    #[test]
    fn test_numeric_suffix_orders_by_value_not_lexically() {
        let entries = vec![
            ("7_10".to_string(), "a".to_string()),
            ("7_9".to_string(), "b".to_string()),
        ];

        let ordered = order_labels(entries);

        assert_eq!(ordered[0].1, "b");
        assert_eq!(ordered[1].1, "a");
    }

    #[test]
    fn test_end_marker_sorts_after_range_and_suffixes() {
        let entries = vec![
            ("5_end".to_string(), "end".to_string()),
            ("5-6".to_string(), "range".to_string()),
            ("5_sp".to_string(), "other".to_string()),
            ("5_1".to_string(), "num".to_string()),
            ("5".to_string(), "plain".to_string()),
        ];

        let ordered = order_labels(entries);
        let ids: Vec<&str> = ordered.iter().map(|(_, id)| id.as_str()).collect();

        assert_eq!(ids.first(), Some(&"plain"));
        assert_eq!(ids.get(1), Some(&"num"));
        assert_eq!(ids.last(), Some(&"end"));
        // "5-6" < "5_sp" lexically ('-' is 0x2D, '_' is 0x5F)
        assert_eq!(ids.get(2), Some(&"range"));
        assert_eq!(ids.get(3), Some(&"other"));
    }
}
