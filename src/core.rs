pub mod cli;
pub mod cmds;
pub mod engine;
pub mod fs;
pub mod logging;
pub mod main_shared;
pub mod output;
pub mod types;
