//! Scored fuzzy filtering over icon names.
//!
//! Match quality is a 0-100 score built from a rule ladder: exact match,
//! prefix, hyphen-atom initials, substring, then in-order subsequence. Callers
//! set a minimum score to drop weak matches and a result cap for display.

/// A candidate that passed the filter, with its match score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub name: &'a str,
    /// 0-100; higher is better.
    pub score: u32,
}

/// Score for an exact (case-insensitive) match.
const SCORE_EXACT: u32 = 100;
/// Score for a prefix match.
const SCORE_PREFIX: u32 = 90;
/// Score when the query matches the initials of the name's atoms
/// (e.g. `cc` matching `credit-card`).
const SCORE_INITIALS: u32 = 80;
/// Score for a substring match anywhere in the name.
const SCORE_SUBSTRING: u32 = 60;
/// Base score for an in-order character subsequence match; density of the
/// match adds up to 20 on top.
const SCORE_SUBSEQUENCE_BASE: u32 = 30;

/// Filter `candidates` by `query`, best matches first.
///
/// Results scoring below `min_score` are dropped and at most `max_results`
/// are returned. Ties are broken alphabetically so output is stable. An empty
/// query matches nothing; sampling defaults is the caller's concern.
pub fn filter<'a>(
    query: &str,
    candidates: &[&'a str],
    max_results: usize,
    min_score: u32,
) -> Vec<ScoredMatch<'a>> {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ScoredMatch<'a>> = candidates
        .iter()
        .copied()
        .filter_map(|name| {
            let score = score(&query, &name.to_ascii_lowercase());
            (score >= min_score && score > 0).then_some(ScoredMatch { name, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(b.name)));
    matches.truncate(max_results);
    matches
}

/// Score one lowercase candidate against a lowercase query.
fn score(query: &str, candidate: &str) -> u32 {
    if candidate == query {
        return SCORE_EXACT;
    }
    if candidate.starts_with(query) {
        return SCORE_PREFIX;
    }
    if initials(candidate).starts_with(query) {
        return SCORE_INITIALS;
    }
    if candidate.contains(query) {
        return SCORE_SUBSTRING;
    }
    if is_subsequence(query, candidate) {
        // Denser matches (query covering more of the candidate) rank higher.
        let density = (query.chars().count() * 20) / candidate.chars().count().max(1);
        return SCORE_SUBSEQUENCE_BASE + density as u32;
    }
    0
}

/// First character of each `-`/`_`/space separated atom.
fn initials(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter_map(|atom| atom.chars().next())
        .collect()
}

/// True if all of `query`'s characters appear in `candidate` in order.
fn is_subsequence(query: &str, candidate: &str) -> bool {
    let mut chars = candidate.chars();
    query.chars().all(|q| chars.any(|c| c == q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CANDIDATES: &[&str] = &[
        "arrow-down",
        "arrow-up",
        "arrows",
        "credit-card",
        "cloud-download",
        "star",
        "star-half",
        "star-o",
    ];

    fn names<'a>(matches: &'a [ScoredMatch<'a>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.name).collect()
    }

    #[test]
    fn exact_match_ranks_first() {
        let result = filter("star", CANDIDATES, 5, 30);
        assert_eq!(names(&result)[0], "star");
        assert_eq!(result[0].score, 100);
    }

    #[test]
    fn prefix_beats_substring() {
        let result = filter("arrow", CANDIDATES, 5, 30);
        assert_eq!(names(&result), vec!["arrow-down", "arrow-up", "arrows"]);
        assert_eq!(result[0].score, 90);
    }

    #[test]
    fn initials_match() {
        let result = filter("cc", CANDIDATES, 5, 30);
        assert!(names(&result).contains(&"credit-card"));
        let cc = result.iter().find(|m| m.name == "credit-card").unwrap();
        assert_eq!(cc.score, 80);
    }

    #[test]
    fn substring_match() {
        let result = filter("down", CANDIDATES, 5, 30);
        assert_eq!(names(&result), vec!["arrow-down", "cloud-download"]);
    }

    #[test]
    fn result_cap_holds_for_any_query() {
        for query in ["a", "s", "ar", "o", "star", "-"] {
            let result = filter(query, CANDIDATES, 5, 0);
            assert!(result.len() <= 5, "query {query:?} returned {}", result.len());
        }
    }

    #[test]
    fn min_score_drops_weak_matches() {
        let weak = filter("sh", CANDIDATES, 5, 0);
        let strict = filter("sh", CANDIDATES, 5, 70);
        assert!(weak.len() >= strict.len());
        for m in strict {
            assert!(m.score >= 70);
        }
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(filter("", CANDIDATES, 5, 30).is_empty());
        assert!(filter("   ", CANDIDATES, 5, 30).is_empty());
    }

    #[test]
    fn no_match_for_garbage() {
        assert!(filter("zzzz", CANDIDATES, 5, 30).is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let upper = filter("STAR", CANDIDATES, 5, 30);
        let lower = filter("star", CANDIDATES, 5, 30);
        assert_eq!(names(&upper), names(&lower));
    }

    #[test]
    fn subsequence_scores_by_density() {
        assert!(is_subsequence("crd", "credit-card"));
        let dense = score("starhal", "star-half");
        let sparse = score("on", "cloud-download");
        assert!(dense > sparse, "dense {dense} should beat sparse {sparse}");
    }
}
