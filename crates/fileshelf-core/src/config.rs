//! Environment-derived client configuration.

pub(crate) const API_URL_ENV: &str = "FILESHELF_API_URL";
pub(crate) const TIMEOUT_MS_ENV: &str = "FILESHELF_TIMEOUT_MS";

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8080";
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[must_use]
pub(crate) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(crate) fn read_env_u64(name: &str) -> Option<u64> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
}

#[must_use]
pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("http://localhost:8080/"), "http://localhost:8080");
        assert_eq!(normalize_base_url("http://api.example.com"), "http://api.example.com");
    }
}
