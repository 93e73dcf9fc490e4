pub mod reducers;
pub mod relcov;
pub mod relscore;
