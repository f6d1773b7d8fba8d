use serde::Deserialize;
use thiserror::Error;

pub const MIN_YEARS_OF_SERVICE: u32 = 1;
pub const MAX_YEARS_OF_SERVICE: u32 = 100;
pub const MAX_SEVERANCE_PAY: i64 = 1_000_000_000_000;

/// A severance payment description that has passed the strict schema.
/// Amounts are whole yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeverancePayRequest {
    pub years_of_service: u32,
    pub is_disability: bool,
    pub is_officer: bool,
    pub severance_pay: i64,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("request does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error(
        "yearsOfService must be between {MIN_YEARS_OF_SERVICE} and {MAX_YEARS_OF_SERVICE}, got {0}"
    )]
    YearsOfServiceOutOfRange(u32),

    #[error("severancePay must be between 0 and {MAX_SEVERANCE_PAY}, got {0}")]
    SeverancePayOutOfRange(i64),
}

/// The only error the pipeline surfaces. Callers see the generic message;
/// the per-field violation stays reachable through `source()`.
#[derive(Debug, Error)]
#[error("invalid argument")]
pub struct InvalidArgument(#[from] ValidationError);

impl InvalidArgument {
    pub fn violation(&self) -> &ValidationError {
        &self.0
    }
}
