use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<()> = OnceLock::new();

/// Enables timestamped logging. Before this is called, `log!` lines go to
/// stderr unprefixed so library tests stay quiet but never panic.
pub fn init_logger() {
    LOGGER.get_or_init(|| ());
}

pub fn log(message: &str) {
    if LOGGER.get().is_some() {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}] {}", timestamp, message);
    } else {
        eprintln!("{}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
