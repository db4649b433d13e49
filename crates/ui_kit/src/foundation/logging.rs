//! Logging utilities

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Initialize the logging system at `Info`, overridable through `RUST_LOG`
pub fn init() {
    init_with_level(LevelFilter::Info);
}

/// Initialize the logging system with a default level; `RUST_LOG` still wins
pub fn init_with_level(level: LevelFilter) {
    builder(level).parse_default_env().init();
}

/// Initialize logging for tests, ignoring repeated calls
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_uses_default_level() {
        assert_eq!(builder(LevelFilter::Debug).build().filter(), LevelFilter::Debug);
        assert_eq!(builder(LevelFilter::Warn).build().filter(), LevelFilter::Warn);
    }
}
