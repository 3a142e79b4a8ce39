//! Winner selection over accumulated engagement scores.

use std::collections::HashMap;

/// Picks the variant with the strictly greatest accumulated score.
///
/// Ties break by variant-list order: the earliest-listed variant among
/// the tied maxima wins, so repeated calls on identical input always
/// return the same headline. A variant with no recorded score counts
/// as zero. Returns `None` for an empty variant list.
pub fn select_winner<'a>(variants: &'a [String], stats: &HashMap<String, u64>) -> Option<&'a str> {
    let mut best: Option<(&str, u64)> = None;
    for variant in variants {
        let score = stats.get(variant).copied().unwrap_or(0);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((variant, score)),
        }
    }
    best.map(|(variant, _)| variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_highest_score_wins() {
        let variants = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let stats = stats(&[("A", 10), ("B", 42), ("C", 17)]);
        assert_eq!(select_winner(&variants, &stats), Some("B"));
    }

    #[test]
    fn test_tie_breaks_by_variant_order() {
        let variants = vec!["A".to_string(), "B".to_string()];
        let tied = stats(&[("A", 10), ("B", 10)]);
        for _ in 0..20 {
            assert_eq!(select_winner(&variants, &tied), Some("A"));
        }

        let reversed = vec!["B".to_string(), "A".to_string()];
        assert_eq!(select_winner(&reversed, &tied), Some("B"));
    }

    #[test]
    fn test_unscored_variant_counts_as_zero() {
        let variants = vec!["A".to_string(), "B".to_string()];
        let stats = stats(&[("B", 3)]);
        assert_eq!(select_winner(&variants, &stats), Some("B"));
    }

    #[test]
    fn test_empty_variants_has_no_winner() {
        let variants: Vec<String> = Vec::new();
        assert_eq!(select_winner(&variants, &HashMap::new()), None);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let variants = vec!["A".to_string(), "B".to_string()];
        let stats = stats(&[("A", 5), ("B", 9)]);
        let snapshot = stats.clone();
        select_winner(&variants, &stats);
        assert_eq!(stats, snapshot);
    }
}
