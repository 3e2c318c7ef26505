pub mod api;
pub mod backend;
pub mod cli;
pub mod core;
pub mod dialog;
pub mod schedule;
pub mod session;
pub mod views;
