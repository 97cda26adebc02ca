//! API module for the notification route

pub mod webhook;

pub use webhook::{handle_deploy_created, translate};
