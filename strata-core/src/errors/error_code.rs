//! Stable error codes for log and report correlation.

pub const NOT_FOUND: &str = "STRATA_NOT_FOUND";
pub const SOURCE_UNAVAILABLE: &str = "STRATA_SOURCE_UNAVAILABLE";
pub const ANALYSIS_FAILED: &str = "STRATA_ANALYSIS_FAILED";
pub const CONFIG_ERROR: &str = "STRATA_CONFIG_ERROR";
pub const SOURCE_ERROR: &str = "STRATA_SOURCE_ERROR";

/// Every Strata error enum exposes a stable machine-readable code.
/// Codes never change once shipped; reporting layers key off them.
pub trait StrataErrorCode {
    fn error_code(&self) -> &'static str;
}
