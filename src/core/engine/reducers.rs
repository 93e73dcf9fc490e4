use clap::ValueEnum;
use strum::{Display, EnumString};

use crate::types::{AppError, AppResult, TrialCoverage};

/// Folds a sequence of ratios into a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ValueReducer {
    /// Middle sorted value; for an even-length sequence, the mean of the
    /// two middle values.
    Median,
    Min,
    Max,
    Mean,
}

impl ValueReducer {
    /// Fails with `EmptyInput` on an empty sequence rather than producing
    /// 0 or NaN.
    pub fn reduce(self, values: &[f64]) -> AppResult<f64> {
        if values.is_empty() {
            return Err(AppError::EmptyInput(
                "cannot reduce an empty sequence of values".to_string(),
            ));
        }
        let result = match self {
            ValueReducer::Median => median(values),
            ValueReducer::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            ValueReducer::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            ValueReducer::Mean => values.iter().sum::<f64>() / values.len() as f64,
        };
        Ok(result)
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Reduces the coverage sets of an approach's trials into one reference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionReducer {
    /// Best-case reachable: any trial hit the edge.
    Union,
    /// Guaranteed reachable: every trial hit the edge.
    Intersection,
}

impl CollectionReducer {
    /// Union of zero sets is the empty set. Intersection of zero sets is
    /// undefined (not a universal set) and fails with `EmptyInput`.
    pub fn reduce<'a, E, I>(self, sets: I) -> AppResult<TrialCoverage<E>>
    where
        E: Ord + Clone + 'a,
        I: IntoIterator<Item = &'a TrialCoverage<E>>,
    {
        let mut sets = sets.into_iter();
        match self {
            CollectionReducer::Union => {
                Ok(sets.fold(TrialCoverage::new(), |acc, set| &acc | set))
            }
            CollectionReducer::Intersection => {
                let first = sets.next().ok_or_else(|| {
                    AppError::EmptyInput(
                        "cannot intersect an empty collection of sets".to_string(),
                    )
                })?;
                Ok(sets.fold(first.clone(), |acc, set| &acc & set))
            }
        }
    }
}
