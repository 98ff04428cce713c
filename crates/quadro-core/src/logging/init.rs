use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global `env_logger` exactly once; later calls are
/// no-ops, so binaries and tests may call it freely.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies
/// (for example `"info"` or `"quadro_core=debug"`).
pub fn init(default_filter: &str) {
    INIT.call_once(|| {
        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
        env_logger::Builder::new().parse_filters(&filter).init();
        log::debug!("logging ready (filter {filter:?})");
    });
}
