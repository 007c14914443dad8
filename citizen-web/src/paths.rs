//! Helpers for constructing URLs to static assets that respect the
//! deployment base path.

/// Build a URL for a static asset, honoring `PUBLIC_URL` when the app is
/// hosted under a subdirectory.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g. `/app` when hosted under a
/// subdirectory). `None` when the app is served from the site root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
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

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, router_base};

    #[test]
    fn asset_paths_are_root_anchored_without_a_base() {
        assert_eq!(asset_path("static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(asset_path("/static/img/logo.svg"), "/static/img/logo.svg");
    }

    #[test]
    fn asset_paths_prepend_the_configured_base() {
        assert_eq!(
            super::asset_path_with_base("static/img/logo.svg", "/app"),
            "/app/static/img/logo.svg"
        );
        assert_eq!(
            super::asset_path_with_base("/static/img/logo.svg", "/app/"),
            "/app/static/img/logo.svg"
        );
    }

    #[test]
    fn router_base_defaults_to_none() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_trims_trailing_slash() {
        assert_eq!(
            super::router_base_with_base("/app/"),
            Some(String::from("/app"))
        );
    }
}
