pub mod cli;
pub mod container;
pub mod edit;
pub mod error;
pub mod show;
