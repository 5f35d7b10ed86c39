pub mod dispatch;
pub mod route;
pub mod shell;
pub mod stats;
