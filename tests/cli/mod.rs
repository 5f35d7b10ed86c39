mod basic;
mod route;
mod shell;
mod stats;
pub mod support;
