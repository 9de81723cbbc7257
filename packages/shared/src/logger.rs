//! Tracing subscriber setup shared by the server and client binaries.

use tracing_subscriber::EnvFilter;

/// Default filter directives for a binary: its own crate plus tower_http.
///
/// Cargo bin names use hyphens; tracing targets use the crate name with
/// underscores.
pub fn default_filter(bin_name: &str, default_level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={default_level},tower_http={default_level}")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the given binary name is
/// logged at `default_level` alongside tower_http.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(bin_name, default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_normalizes_bin_name() {
        // テスト項目: ハイフン入りのバイナリ名がターゲット名に正規化される
        // when (操作):
        let filter = default_filter("madoguchi-client", "info");

        // then (期待する結果):
        assert_eq!(filter, "madoguchi_client=info,tower_http=info");
    }
}
