pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod injection;
pub mod process;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
