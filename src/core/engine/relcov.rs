use std::collections::BTreeMap;

use crate::core::engine::reducers::{CollectionReducer, ValueReducer};
use crate::types::{
    AppError, AppResult, ApproachData, ApproachName, Campaign, ResultTable, TrialCoverage,
};

/// Share of `reference` that `trial` covers: |trial ∩ reference| / |reference|.
///
/// Undefined (not zero) when the reference set is empty; callers that want
/// "N/A" semantics must catch `DivisionUndefined` themselves.
pub fn relcov<E: Ord>(trial: &TrialCoverage<E>, reference: &TrialCoverage<E>) -> AppResult<f64> {
    if reference.is_empty() {
        return Err(AppError::DivisionUndefined(
            "relcov reference set is empty".to_string(),
        ));
    }
    let shared = trial.intersection(reference).count();
    Ok(shared as f64 / reference.len() as f64)
}

/// Relcov of `subject`'s trials against `reference`'s trials collapsed into
/// one set, folded across trials.
///
/// `collection_reducer` turns the reference approach into a single edge set
/// (Union for best-case reachable, Intersection for guaranteed reachable);
/// `value_reducer` folds the per-trial ratios.
pub fn relcov_against<E: Ord + Clone>(
    subject: &ApproachData<E>,
    reference: &ApproachData<E>,
    value_reducer: ValueReducer,
    collection_reducer: CollectionReducer,
) -> AppResult<f64> {
    let reference_set = collection_reducer.reduce(reference.trials().values())?;
    let ratios = subject
        .trials()
        .values()
        .map(|trial| relcov(trial, &reference_set))
        .collect::<AppResult<Vec<f64>>>()?;
    value_reducer.reduce(&ratios)
}

/// Name-addressed `relcov_against` over a campaign.
pub fn relcov_between<E: Ord + Clone>(
    campaign: &Campaign<E>,
    subject: &str,
    reference: &str,
    value_reducer: ValueReducer,
    collection_reducer: CollectionReducer,
) -> AppResult<f64> {
    relcov_against(
        campaign.get(subject)?,
        campaign.get(reference)?,
        value_reducer,
        collection_reducer,
    )
}

/// Full approach x approach table: cells[row][col] = relcov of row's trials
/// against col's reduced reference set. Cells are independent of each other;
/// the diagonal (with Union) is each approach's reliability.
pub fn relcov_table<E: Ord + Clone>(
    campaign: &Campaign<E>,
    value_reducer: ValueReducer,
    collection_reducer: CollectionReducer,
) -> AppResult<ResultTable> {
    let columns: Vec<ApproachName> = campaign.names().cloned().collect();
    let mut cells = BTreeMap::new();
    for (row_name, row_data) in campaign.approaches() {
        let mut row = BTreeMap::new();
        for (col_name, col_data) in campaign.approaches() {
            let value = relcov_against(row_data, col_data, value_reducer, collection_reducer)?;
            row.insert(col_name.clone(), value);
        }
        cells.insert(row_name.clone(), row);
    }
    Ok(ResultTable { columns, cells })
}

/// Self-consistency of each approach: the median relcov of its trials
/// against the union of its own trials.
pub fn reliability<E: Ord + Clone>(
    campaign: &Campaign<E>,
) -> AppResult<BTreeMap<ApproachName, f64>> {
    let mut scores = BTreeMap::new();
    for (name, data) in campaign.approaches() {
        let value = relcov_against(data, data, ValueReducer::Median, CollectionReducer::Union)?;
        scores.insert(name.clone(), value);
    }
    Ok(scores)
}

/// How much of the designated corpus's coverage each approach subsumes.
///
/// The corpus is the *subject* and each evaluated approach supplies the
/// *reference* set; swapping the roles silently yields wrong numbers, so
/// this is the one documented direction. The corpus approach must exist and
/// hold exactly one trial.
pub fn reach<E: Ord + Clone>(
    campaign: &Campaign<E>,
    corpus: &str,
    value_reducer: ValueReducer,
    collection_reducer: CollectionReducer,
) -> AppResult<BTreeMap<ApproachName, f64>> {
    let corpus_data = campaign.get(corpus)?;
    if corpus_data.trials().len() != 1 {
        return Err(AppError::InvalidCorpus {
            name: corpus.to_string(),
            trials: corpus_data.trials().len(),
        });
    }

    let mut scores = BTreeMap::new();
    for (name, data) in campaign.approaches() {
        let value = relcov_against(corpus_data, data, value_reducer, collection_reducer)?;
        scores.insert(name.clone(), value);
    }
    Ok(scores)
}
