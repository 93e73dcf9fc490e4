use std::collections::BTreeMap;

use crate::types::{
    AppError, AppResult, ApproachData, ApproachName, Campaign, TrialCoverage,
};

/// Result of a campaign-wide relscore pass. Approaches with zero qualifying
/// trials contribute no usable data: their score is undefined and they land
/// in `excluded` (still counting toward every edge's missing count), never
/// silently scored 0. Callers decide whether that means "N/A" or abort.
#[derive(Debug, Clone)]
pub struct RelscoreOutcome {
    pub scores: BTreeMap<ApproachName, f64>,
    pub excluded: Vec<ApproachName>,
}

/// Relscore for a single approach, with `missing` counts taken over the
/// whole campaign. Fails with `DivisionUndefined` when the approach has no
/// trial with non-empty coverage.
pub fn relscore<E: Ord + Clone>(campaign: &Campaign<E>, approach: &str) -> AppResult<f64> {
    let data = campaign.get(approach)?;
    let missing = missing_counts(campaign);
    approach_score(approach, data, &missing)
}

/// Campaign-wide relscore.
///
/// For every edge `e` observed anywhere,
/// `relscore(a, e) = missing(e) * |trials of a hitting e| / |qualifying trials of a|`
/// where `missing(e)` counts the approaches that never hit `e` and
/// qualifying trials are those with non-empty coverage. `score(a)` sums
/// over all edges; an edge hit by every approach carries no differential
/// information and contributes nothing.
pub fn relscore_all<E: Ord + Clone>(campaign: &Campaign<E>) -> RelscoreOutcome {
    let missing = missing_counts(campaign);

    let mut scores = BTreeMap::new();
    let mut excluded = Vec::new();
    for (name, data) in campaign.approaches() {
        match approach_score(name, data, &missing) {
            Ok(score) => {
                scores.insert(name.clone(), score);
            }
            Err(AppError::DivisionUndefined(_)) => excluded.push(name.clone()),
            // approach_score has no other failure mode
            Err(_) => unreachable!(),
        }
    }
    RelscoreOutcome { scores, excluded }
}

/// For each edge observed anywhere in the campaign, the number of
/// approaches that never hit it. An approach whose trials are all empty has
/// an empty upper bound and counts as missing for every edge.
fn missing_counts<E: Ord + Clone>(campaign: &Campaign<E>) -> BTreeMap<E, usize> {
    let uppers: Vec<TrialCoverage<E>> = campaign
        .approaches()
        .values()
        .map(|data| data.upper_bound())
        .collect();

    let all_edges: TrialCoverage<E> = uppers
        .iter()
        .fold(TrialCoverage::new(), |acc, upper| &acc | upper);

    all_edges
        .into_iter()
        .map(|edge| {
            let count = uppers.iter().filter(|upper| !upper.contains(&edge)).count();
            (edge, count)
        })
        .collect()
}

fn approach_score<E: Ord + Clone>(
    name: &str,
    data: &ApproachData<E>,
    missing: &BTreeMap<E, usize>,
) -> AppResult<f64> {
    let qualifying = data.qualifying_trials().count();
    if qualifying == 0 {
        return Err(AppError::DivisionUndefined(format!(
            "approach {name:?} has no trials with non-empty coverage"
        )));
    }

    let mut score = 0.0;
    // Edges outside this approach's upper bound contribute 0, so only its
    // own reached edges need visiting.
    for edge in data.upper_bound().iter() {
        let never_hit = missing.get(edge).copied().unwrap_or(0);
        if never_hit == 0 {
            continue;
        }
        let trials_hit = data.trials().values().filter(|t| t.contains(edge)).count();
        score += never_hit as f64 * trials_hit as f64 / qualifying as f64;
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn coverage(edges: &[&str]) -> TrialCoverage<String> {
        edges.iter().map(|e| e.to_string()).collect()
    }

    fn campaign(approaches: &[(&str, &[(&str, &[&str])])]) -> Campaign<String> {
        Campaign::new(
            approaches
                .iter()
                .map(|(name, trials)| {
                    let data = ApproachData::new(
                        trials
                            .iter()
                            .map(|(id, edges)| (id.to_string(), coverage(edges)))
                            .collect(),
                    )
                    .expect("valid approach");
                    (name.to_string(), data)
                })
                .collect(),
        )
        .expect("valid campaign")
    }

    /// The worked example from the literature: edge e1 is hit by everyone,
    /// e2 by all of fuzzer_c and half of fuzzer_a's trials, e3 by all of
    /// fuzzer_b and fuzzer_c and some of fuzzer_a.
    #[test]
    fn literature_example_scores() {
        let campaign = campaign(&[
            ("fuzzer_a", &[("t1", &["e1", "e2", "e3"]), ("t2", &["e1"])]),
            ("fuzzer_b", &[("t1", &["e1", "e3"]), ("t2", &["e1", "e3"])]),
            (
                "fuzzer_c",
                &[("t1", &["e1", "e2", "e3"]), ("t2", &["e1", "e2", "e3"])],
            ),
        ]);
        let outcome = relscore_all(&campaign);
        assert!(outcome.excluded.is_empty());
        assert_eq!(outcome.scores["fuzzer_c"], 1.0);
        assert_eq!(outcome.scores["fuzzer_a"], 0.5);
        assert_eq!(outcome.scores["fuzzer_b"], 0.0);
    }

    #[test]
    fn edge_hit_by_everyone_scores_nothing() {
        let campaign = campaign(&[
            ("a", &[("t1", &["shared"])]),
            ("b", &[("t1", &["shared"])]),
        ]);
        let outcome = relscore_all(&campaign);
        assert_eq!(outcome.scores["a"], 0.0);
        assert_eq!(outcome.scores["b"], 0.0);
    }

    #[test]
    fn scores_are_never_negative() {
        let campaign = campaign(&[
            ("a", &[("t1", &["e1", "e2"]), ("t2", &[])]),
            ("b", &[("t1", &["e3"])]),
        ]);
        for (name, score) in relscore_all(&campaign).scores {
            assert!(score >= 0.0, "{name} scored {score}");
        }
    }

    #[test]
    fn empty_trials_are_excluded_from_the_denominator() {
        // a's second trial recorded nothing; its exclusive edge e2 was hit
        // by its one qualifying trial, so the ratio is 1/1, not 1/2.
        let campaign = campaign(&[
            ("a", &[("t1", &["e1", "e2"]), ("t2", &[])]),
            ("b", &[("t1", &["e1"])]),
        ]);
        let outcome = relscore_all(&campaign);
        assert_eq!(outcome.scores["a"], 1.0);
    }

    #[test]
    fn single_approach_relscore_is_undefined_without_qualifying_trials() {
        let campaign = campaign(&[
            ("a", &[("t1", &["e1"])]),
            ("crashed", &[("t1", &[])]),
        ]);
        match relscore(&campaign, "crashed") {
            Err(AppError::DivisionUndefined(context)) => {
                assert!(context.contains("crashed"), "context was {context:?}");
            }
            other => panic!("expected DivisionUndefined, got {other:?}"),
        }
    }

    #[test]
    fn all_empty_approach_is_excluded_but_still_counts_as_missing() {
        // "crashed" hit nothing at all: it cannot be scored, but it still
        // misses e1, which is what makes a's and b's shared edge worth 1.0
        // each.
        let campaign = campaign(&[
            ("a", &[("t1", &["e1"])]),
            ("b", &[("t1", &["e1"])]),
            ("crashed", &[("t1", &[])]),
        ]);
        let outcome = relscore_all(&campaign);
        assert_eq!(outcome.excluded, vec!["crashed".to_string()]);
        assert_eq!(outcome.scores["a"], 1.0);
        assert_eq!(outcome.scores["b"], 1.0);
        assert!(!outcome.scores.contains_key("crashed"));
    }

    #[test]
    fn excluding_an_approach_changes_missing_counts() {
        // With c present, e2 is missed only by c and rewards a and b; once
        // c is filtered out before scoring, e2 is hit by every remaining
        // approach and rewards nobody.
        let full = campaign(&[
            ("a", &[("t1", &["e1", "e2"])]),
            ("b", &[("t1", &["e1", "e2"])]),
            ("c", &[("t1", &["e1"])]),
        ]);
        let filtered = campaign(&[
            ("a", &[("t1", &["e1", "e2"])]),
            ("b", &[("t1", &["e1", "e2"])]),
        ]);
        let full_scores = relscore_all(&full).scores;
        let filtered_scores = relscore_all(&filtered).scores;
        assert_eq!(full_scores["a"], 1.0);
        assert_eq!(full_scores["b"], 1.0);
        assert_eq!(filtered_scores["a"], 0.0);
        assert_eq!(filtered_scores["b"], 0.0);
    }

    #[test]
    fn relscore_for_unknown_approach_is_missing() {
        let campaign = campaign(&[("a", &[("t1", &["e1"])])]);
        assert!(matches!(
            relscore(&campaign, "nope"),
            Err(AppError::MissingApproach(_))
        ));
    }
}
