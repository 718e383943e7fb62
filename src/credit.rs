use crate::error::{CreditError, Result};
use crate::params::{CreditPlan, ResolvedCredit, Target};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a calculation. Amounts are whole currency units, rounded up.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CreditResult {
    Differentiated { payments: Vec<u64>, overpayment: i64 },
    Payment { payment: u64, overpayment: i64 },
    Term { term: u32, overpayment: i64 },
    Principal { principal: u64, overpayment: i64 },
}

impl CreditResult {
    pub fn overpayment(&self) -> i64 {
        match self {
            CreditResult::Differentiated { overpayment, .. }
            | CreditResult::Payment { overpayment, .. }
            | CreditResult::Term { overpayment, .. }
            | CreditResult::Principal { overpayment, .. } => *overpayment,
        }
    }

    /// Whole years of a solved term.
    pub fn years(&self) -> Option<u32> {
        match self {
            CreditResult::Term { term, .. } => Some(term / 12),
            _ => None,
        }
    }

    /// Months left over after the whole years of a solved term.
    pub fn months(&self) -> Option<u32> {
        match self {
            CreditResult::Term { term, .. } => Some(term % 12),
            _ => None,
        }
    }
}

/// Computes the unknown value of a resolved credit and its overpayment.
pub fn calculate(credit: &ResolvedCredit) -> Result<CreditResult> {
    let inputs = &credit.inputs;
    let interest = required(inputs.interest, "interest")?;

    let result = match credit.plan {
        CreditPlan::Differentiated => {
            let principal = required(inputs.principal, "principal")?;
            let term = required(inputs.term, "term")?;
            let payments = differentiated_payments(principal, term, interest)?;
            let total = payments
                .iter()
                .try_fold(0u64, |sum, payment| sum.checked_add(*payment))
                .ok_or_else(|| CreditError::invalid("total of payments overflows"))?;
            CreditResult::Differentiated {
                overpayment: overpayment(total, principal)?,
                payments,
            }
        }
        CreditPlan::Annuity(Target::Payment) => {
            let principal = required(inputs.principal, "principal")?;
            let term = required(inputs.term, "term")?;
            let payment = annuity_payment(principal, term, interest)?;
            CreditResult::Payment {
                payment,
                overpayment: overpayment(
                    payment
                        .checked_mul(term as u64)
                        .ok_or_else(|| CreditError::invalid("total of payments overflows"))?,
                    principal,
                )?,
            }
        }
        CreditPlan::Annuity(Target::Term) => {
            let principal = required(inputs.principal, "principal")?;
            let payment = required(inputs.payment, "payment")?;
            let term = annuity_term(principal, payment, interest)?;
            CreditResult::Term {
                term,
                overpayment: round_up(payment * term as f64 - principal as f64)?,
            }
        }
        CreditPlan::Annuity(Target::Principal) => {
            let payment = required(inputs.payment, "payment")?;
            let term = required(inputs.term, "term")?;
            let principal = annuity_principal(payment, term, interest)?;
            CreditResult::Principal {
                principal,
                overpayment: round_up(payment * term as f64 - principal as f64)?,
            }
        }
    };
    debug!("{:?} -> {:?}", credit.plan, result);
    Ok(result)
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| CreditError::invalid(format!("{} is required for this calculation", name)))
}

fn overpayment(total: u64, principal: u64) -> Result<i64> {
    match (i64::try_from(total), i64::try_from(principal)) {
        (Ok(total), Ok(principal)) => Ok(total - principal),
        _ => Err(CreditError::invalid(format!(
            "amounts too large: paid {}, principal {}",
            total, principal
        ))),
    }
}

fn round_up(amount: f64) -> Result<i64> {
    if amount.is_finite() && amount.abs() < i64::MAX as f64 {
        Ok(amount.ceil() as i64)
    } else {
        Err(CreditError::invalid(format!("calculation produced {}", amount)))
    }
}

fn round_up_amount(amount: f64) -> Result<u64> {
    if amount.is_finite() && amount >= 0. && amount < u64::MAX as f64 {
        Ok(amount.ceil() as u64)
    } else {
        Err(CreditError::invalid(format!("calculation produced {}", amount)))
    }
}

/// Month-by-month payments of a differentiated credit: a fixed share of the
/// principal plus interest on what is still owed at the start of the month.
pub fn differentiated_payments(principal: u64, term: u32, interest: f64) -> Result<Vec<u64>> {
    if term == 0 {
        return Err(CreditError::invalid("term must be at least one month"));
    }
    if principal == 0 {
        return Err(CreditError::invalid("differentiated credit needs a principal"));
    }
    let principal = principal as f64;
    let months = term as f64;

    (1..=term)
        .map(|month| {
            let owed = principal - (principal * (month - 1) as f64) / months;
            let amount = principal / months + interest * owed;
            trace!("month {}, owed {}, payment {}", month, owed, amount);
            round_up_amount(amount)
        })
        .collect()
}

// i * (1+i)^n / ((1+i)^n - 1)
fn annuity_factor(term: u32, interest: f64) -> Result<f64> {
    if interest <= 0. {
        return Err(CreditError::invalid(
            "annuity needs a positive interest rate",
        ));
    }
    if term == 0 {
        return Err(CreditError::invalid("term must be at least one month"));
    }
    let growth = (1. + interest).powf(term as f64);
    let factor = (interest * growth) / (growth - 1.);
    if factor.is_finite() && factor > 0. {
        Ok(factor)
    } else {
        Err(CreditError::invalid(format!(
            "annuity factor undefined for term {} and rate {}",
            term, interest
        )))
    }
}

/// Fixed monthly payment that repays `principal` over `term` months.
pub fn annuity_payment(principal: u64, term: u32, interest: f64) -> Result<u64> {
    let factor = annuity_factor(term, interest)?;
    round_up_amount(principal as f64 * factor)
}

/// Months needed to repay `principal` with a fixed `payment`, rounded up.
pub fn annuity_term(principal: u64, payment: f64, interest: f64) -> Result<u32> {
    if interest <= 0. {
        return Err(CreditError::invalid(
            "annuity needs a positive interest rate",
        ));
    }
    let accrued = interest * principal as f64;
    if payment <= accrued {
        return Err(CreditError::invalid(format!(
            "payment {} does not cover the monthly interest {}",
            payment, accrued
        )));
    }
    let months = (payment / (payment - accrued)).ln() / (1. + interest).ln();
    if !months.is_finite() || months > u32::MAX as f64 {
        return Err(CreditError::invalid(format!("term undefined, got {}", months)));
    }
    // a zero principal is repaid immediately, but a credit still lasts a month
    Ok((months.ceil() as u32).max(1))
}

/// Principal that a fixed `payment` over `term` months repays.
pub fn annuity_principal(payment: f64, term: u32, interest: f64) -> Result<u64> {
    let factor = annuity_factor(term, interest)?;
    round_up_amount(payment / factor)
}
