use serde_json::Value;

use super::types::{InvalidArgument, SeverancePayRequest};
use super::validate::validate_request;

struct TaxBracket {
    upper_bound: i64,
    rate_pct: i64,
    offset: i64,
}

// Progressive table for retirement income: the first row whose inclusive
// upper bound covers the income applies, tax = income * rate - offset.
const TAX_BRACKETS: [TaxBracket; 7] = [
    TaxBracket {
        upper_bound: 1_949_000,
        rate_pct: 5,
        offset: 0,
    },
    TaxBracket {
        upper_bound: 3_299_000,
        rate_pct: 10,
        offset: 97_500,
    },
    TaxBracket {
        upper_bound: 6_949_000,
        rate_pct: 20,
        offset: 427_500,
    },
    TaxBracket {
        upper_bound: 8_999_000,
        rate_pct: 23,
        offset: 636_000,
    },
    TaxBracket {
        upper_bound: 17_999_000,
        rate_pct: 33,
        offset: 1_536_000,
    },
    TaxBracket {
        upper_bound: 39_999_000,
        rate_pct: 40,
        offset: 2_796_000,
    },
    TaxBracket {
        upper_bound: i64::MAX,
        rate_pct: 45,
        offset: 4_796_000,
    },
];

const DISABILITY_SURCHARGE: i64 = 1_000_000;
const SURTAX_NUMERATOR: i64 = 1021;
const SURTAX_DENOMINATOR: i64 = 1000;

/// Retirement income deduction in yen for a given tenure.
pub fn calc_retirement_income_deduction(years_of_service: u32, is_disability: bool) -> i64 {
    let years = i64::from(years_of_service);
    let base = if years == 1 {
        800_000
    } else if years <= 19 {
        400_000 * years
    } else {
        8_000_000 + 700_000 * (years - 20)
    };

    if is_disability {
        base + DISABILITY_SURCHARGE
    } else {
        base
    }
}

/// Taxable retirement income in yen, truncated down to a multiple of 1000.
///
/// Officers with five or fewer years of service get neither the halving nor
/// the flat reduction; six or more years of service always halves, officer
/// or not.
pub fn calc_taxable_retirement_income(
    years_of_service: u32,
    retirement_income: i64,
    retirement_income_deduction: i64,
    is_executive: bool,
) -> i64 {
    let target_income = retirement_income - retirement_income_deduction;
    if target_income <= 0 {
        return 0;
    }

    let raw = if years_of_service >= 6 {
        target_income / 2
    } else if is_executive {
        target_income
    } else if target_income >= 3_000_000 {
        target_income - 1_500_000
    } else {
        target_income / 2
    };

    raw / 1000 * 1000
}

/// Standard (pre-surtax) income tax for a taxable retirement income.
pub fn calc_standard_income_tax(taxable_retirement_income: i64) -> i64 {
    if taxable_retirement_income == 0 {
        return 0;
    }

    let bracket = TAX_BRACKETS
        .iter()
        .find(|b| taxable_retirement_income <= b.upper_bound)
        .expect("final bracket has no upper bound");

    taxable_retirement_income * bracket.rate_pct / 100 - bracket.offset
}

/// Withheld tax: the standard tax plus the 2.1% reconstruction surtax,
/// fractional yen truncated.
pub fn calc_income_tax_withholding(standard_income_tax: i64) -> i64 {
    standard_income_tax * SURTAX_NUMERATOR / SURTAX_DENOMINATOR
}

/// Full pipeline over an untrusted JSON payload: validate, then run the four
/// computation stages in order. Validation failure aborts before any
/// arithmetic runs.
pub fn calc_income_tax_for_severance_pay(payload: Value) -> Result<i64, InvalidArgument> {
    let request = validate_request(payload)?;
    Ok(withholding_for_request(&request))
}

fn withholding_for_request(request: &SeverancePayRequest) -> i64 {
    let deduction =
        calc_retirement_income_deduction(request.years_of_service, request.is_disability);
    let taxable = calc_taxable_retirement_income(
        request.years_of_service,
        request.severance_pay,
        deduction,
        request.is_officer,
    );
    let standard_tax = calc_standard_income_tax(taxable);
    calc_income_tax_withholding(standard_tax)
}
