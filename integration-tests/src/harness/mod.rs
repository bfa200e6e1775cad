pub mod log_dir;
pub mod tracing;

pub use self::log_dir::LogDir;
pub use self::tracing::{CapturedEvent, EventLog, init_test_tracing};
