use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{AppError, AppResult};

pub type ApproachName = String;
pub type TrialId = String;

/// Edges reached in one execution of an approach. Presence-only: hit count
/// magnitudes are discarded before one of these is built.
pub type TrialCoverage<E> = BTreeSet<E>;

/// Per-approach view of coverage data grouped by trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproachData<E> {
    trials: BTreeMap<TrialId, TrialCoverage<E>>,
}

impl<E: Ord + Clone> ApproachData<E> {
    /// An approach with zero trials is a construction error. Trials with
    /// empty coverage are legal (a run that recorded no hits).
    pub fn new(trials: BTreeMap<TrialId, TrialCoverage<E>>) -> AppResult<Self> {
        if trials.is_empty() {
            return Err(AppError::EmptyInput(
                "approach must have at least one trial".to_string(),
            ));
        }
        Ok(Self { trials })
    }

    pub fn trials(&self) -> &BTreeMap<TrialId, TrialCoverage<E>> {
        &self.trials
    }

    /// Trials that recorded at least one hit. Relscore denominators count
    /// these, not all trials.
    pub fn qualifying_trials(&self) -> impl Iterator<Item = (&TrialId, &TrialCoverage<E>)> {
        self.trials.iter().filter(|(_, cov)| !cov.is_empty())
    }

    /// Edges ever reached by any trial of this approach. Recomputed on
    /// demand; empty only if every trial recorded zero hits.
    pub fn upper_bound(&self) -> TrialCoverage<E> {
        self.trials
            .values()
            .fold(BTreeSet::new(), |acc, cov| &acc | cov)
    }

    /// Edges reached by every trial of this approach. May be empty.
    pub fn lower_bound(&self) -> TrialCoverage<E> {
        let mut trials = self.trials.values();
        let first = trials.next().cloned().unwrap_or_default();
        trials.fold(first, |acc, cov| &acc & cov)
    }
}

/// The top-level input to all computations: one `ApproachData` per approach
/// name. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign<E> {
    approaches: BTreeMap<ApproachName, ApproachData<E>>,
}

impl<E: Ord + Clone> Campaign<E> {
    pub fn new(approaches: BTreeMap<ApproachName, ApproachData<E>>) -> AppResult<Self> {
        if approaches.is_empty() {
            return Err(AppError::EmptyInput(
                "campaign must have at least one approach".to_string(),
            ));
        }
        Ok(Self { approaches })
    }

    pub fn approaches(&self) -> &BTreeMap<ApproachName, ApproachData<E>> {
        &self.approaches
    }

    /// Consume the campaign, e.g. to rebuild it with a filtered approach
    /// set. There is no in-place mutation.
    pub fn into_approaches(self) -> BTreeMap<ApproachName, ApproachData<E>> {
        self.approaches
    }

    pub fn names(&self) -> impl Iterator<Item = &ApproachName> {
        self.approaches.keys()
    }

    pub fn get(&self, name: &str) -> AppResult<&ApproachData<E>> {
        self.approaches
            .get(name)
            .ok_or_else(|| AppError::MissingApproach(name.to_string()))
    }
}

/// Build a campaign from raw hit-count maps, keeping only edges with
/// count >= 1 (presence-only semantics).
pub fn build_campaign<E: Ord + Clone>(
    raw: BTreeMap<ApproachName, BTreeMap<TrialId, BTreeMap<E, u64>>>,
) -> AppResult<Campaign<E>> {
    let mut approaches = BTreeMap::new();
    for (name, trials) in raw {
        let trials = trials
            .into_iter()
            .map(|(trial_id, counts)| {
                let coverage: TrialCoverage<E> = counts
                    .into_iter()
                    .filter(|(_, count)| *count >= 1)
                    .map(|(edge, _)| edge)
                    .collect();
                (trial_id, coverage)
            })
            .collect();
        approaches.insert(name, ApproachData::new(trials)?);
    }
    Campaign::new(approaches)
}

/// A square approach x approach result, rows and columns keyed by name.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    pub columns: Vec<ApproachName>,
    pub cells: BTreeMap<ApproachName, BTreeMap<ApproachName, f64>>,
}

impl ResultTable {
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}
