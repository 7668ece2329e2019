//! GesErrorCode trait for boundary conversion.

/// Every error enum implements this to provide a structured error code
/// string for callers on the other side of a CLI or binding boundary.
pub trait GesErrorCode {
    /// Returns the error code string (e.g., "NOT_A_DAG").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const NOT_A_DAG: &str = "NOT_A_DAG";
pub const INEXTENSIBLE: &str = "INEXTENSIBLE";
pub const UNKNOWN_PHASE: &str = "UNKNOWN_PHASE";
pub const CANDIDATE_SET_TOO_LARGE: &str = "CANDIDATE_SET_TOO_LARGE";
pub const SCORE_ERROR: &str = "SCORE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CANCELLED: &str = "CANCELLED";
