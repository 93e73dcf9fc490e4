pub mod core;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::engine::reducers::{CollectionReducer, ValueReducer};
pub use core::engine::relcov::{
    reach, relcov, relcov_against, relcov_between, relcov_table, reliability,
};
pub use core::engine::relscore::{RelscoreOutcome, relscore, relscore_all};
pub use core::fs::read_campaign_dir;
pub use core::main_shared::run_main;
pub use core::types::build_campaign;
