//! Environment overrides for property-test volume.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; CI
//! raises or lowers the case count for every suite at once through
//! `SPANROUTE_PBT_CASES` and can isolate cases in subprocesses through
//! `SPANROUTE_PBT_FORK`.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PBT_CASES_ENV_KEY: &str = "SPANROUTE_PBT_CASES";
/// Environment variable toggling forked execution of property cases.
pub const PBT_FORK_ENV_KEY: &str = "SPANROUTE_PBT_FORK";

/// Resolved property-test settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads both overrides, keeping a default whenever its variable is unset
    /// or unparsable. Rejected values are reported as `warn` events.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanroute_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PBT_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, &'static str>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_switch(raw: &str) -> Result<bool, &'static str> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of true/false/1/0/yes/no/on/off"),
    }
}
