pub mod error;
pub mod interfaces;
pub mod runner;
pub mod server;
