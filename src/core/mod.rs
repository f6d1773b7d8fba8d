mod engine;
mod types;
mod validate;

pub use engine::{
    calc_income_tax_for_severance_pay, calc_income_tax_withholding,
    calc_retirement_income_deduction, calc_standard_income_tax, calc_taxable_retirement_income,
};
pub use types::{
    InvalidArgument, MAX_SEVERANCE_PAY, MAX_YEARS_OF_SERVICE, MIN_YEARS_OF_SERVICE,
    SeverancePayRequest, ValidationError,
};
pub use validate::validate_request;
