// src/config.rs
// API base address. Trunk passes the build environment through, so
// `CLUB_API_URL=https://api.example.org trunk build --release` bakes it in.
// Leave it unset to call the API on the same origin as the page.

const API_URL_ENV: Option<&str> = option_env!("CLUB_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base: String,
}

impl Config {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(API_URL_ENV.unwrap_or_default())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `path` must start with `/`, e.g. `/api/teams`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}
