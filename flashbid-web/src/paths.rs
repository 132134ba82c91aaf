//! Asset URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/shop` for a subdirectory
/// deploy), relative asset paths are prefixed with it. Without it they are
/// root-anchored.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Resolve a configured image source. Absolute and data URLs pass through.
#[must_use]
pub fn image_src(configured: &str) -> String {
    if is_absolute(configured) {
        configured.to_string()
    } else {
        asset_path(configured)
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("data:")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
