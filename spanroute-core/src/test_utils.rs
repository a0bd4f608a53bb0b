//! Shared test utilities for `spanroute-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanroute_test_support::ci::property_test_profile::ProptestRunProfile;

/// Proptest configuration honouring the shared `SPANROUTE_PBT_CASES` and
/// `SPANROUTE_PBT_FORK` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
