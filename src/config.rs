//! Application configuration.
//!
//! Everything here is resolved at build time. There is deliberately no
//! runtime configuration surface: the API base URL is baked in by build
//! mode, with `LABSTOCK_API_URL` as a compile-time override.

/// API base URL for production builds.
pub const PRODUCTION_API_URL: &str = "http://5.161.233.167:5000";

/// API base URL for local development builds.
pub const LOCAL_API_URL: &str = "http://localhost:5000";

/// Path of the bundled safety-data-sheet lookup document.
///
/// Served by the app's own origin, not the API.
pub const SDS_LOOKUP_PATH: &str = "/msdsLookup.json";

/// How long a success toast stays on screen.
pub const SUCCESS_TOAST_MS: u32 = 3_000;

/// How long an error toast stays on screen.
pub const ERROR_TOAST_MS: u32 = 5_000;

/// Grid page-size choices.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 30];

/// Default grid page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Resolve the API base URL for this build.
///
/// `LABSTOCK_API_URL` set at compile time wins; otherwise debug builds
/// target the local backend and release builds target production.
pub fn api_base() -> &'static str {
    match option_env!("LABSTOCK_API_URL") {
        Some(url) => url,
        None if cfg!(debug_assertions) => LOCAL_API_URL,
        None => PRODUCTION_API_URL,
    }
}

/// Full URL of the backup download endpoint.
///
/// Used for a direct browser navigation, not an API call.
pub fn backup_url() -> String {
    format!("{}/download/backup", api_base())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_has_no_trailing_slash() {
        assert!(!api_base().is_empty());
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn backup_url_targets_backup_endpoint() {
        let url = backup_url();
        assert!(url.starts_with(api_base()));
        assert!(url.ends_with("/download/backup"));
    }
}
