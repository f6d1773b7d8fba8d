use serde_json::Value;

use super::types::{
    InvalidArgument, MAX_SEVERANCE_PAY, MAX_YEARS_OF_SERVICE, MIN_YEARS_OF_SERVICE,
    SeverancePayRequest, ValidationError,
};

/// Parses an untrusted JSON value into a validated request.
///
/// The schema is strict: all four fields are required, unknown fields are
/// rejected, and integer fields refuse floats and strings. Range rules are
/// checked after the structural parse so that nothing downstream ever sees
/// an out-of-range value.
pub fn validate_request(value: Value) -> Result<SeverancePayRequest, InvalidArgument> {
    let request: SeverancePayRequest =
        serde_json::from_value(value).map_err(ValidationError::Schema)?;
    check_ranges(&request)?;
    Ok(request)
}

fn check_ranges(request: &SeverancePayRequest) -> Result<(), ValidationError> {
    if !(MIN_YEARS_OF_SERVICE..=MAX_YEARS_OF_SERVICE).contains(&request.years_of_service) {
        return Err(ValidationError::YearsOfServiceOutOfRange(
            request.years_of_service,
        ));
    }
    if !(0..=MAX_SEVERANCE_PAY).contains(&request.severance_pay) {
        return Err(ValidationError::SeverancePayOutOfRange(
            request.severance_pay,
        ));
    }
    Ok(())
}
