use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber; stdout carries the man page.
///
/// `RUST_LOG` wins when set. Otherwise `verbosity` picks the level:
/// 0 is `warn`, 1 is `info`, anything higher is `debug`.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level(verbosity))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::default_level;

    #[test]
    fn test_default_level_by_verbosity() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "debug");
    }
}
