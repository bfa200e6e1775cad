pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod flags;
pub mod logging;
pub mod session;
pub mod tail;
