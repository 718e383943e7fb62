use crate::error::{CreditError, Result};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The value an annuity calculation solves for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Target {
    Payment,
    Term,
    Principal,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CreditPlan {
    Differentiated,
    Annuity(Target),
}

/// Known values of a credit. `interest` is the nominal monthly rate as a
/// fraction, i.e. the annual percentage divided by 1200.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreditInputs {
    pub principal: Option<u64>,
    pub interest: Option<f64>,
    pub term: Option<u32>,
    pub payment: Option<f64>,
}

impl CreditInputs {
    pub fn with_principal(mut self, principal: u64) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Takes the rate the way users type it: annual, in percent.
    pub fn with_annual_percent(mut self, percent: f64) -> Self {
        self.interest = Some(percent / 1200.);
        self
    }

    pub fn with_term(mut self, term: u32) -> Self {
        self.term = Some(term);
        self
    }

    pub fn with_payment(mut self, payment: f64) -> Self {
        self.payment = Some(payment);
        self
    }
}

/// A credit whose inputs match exactly one calculation scenario.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedCredit {
    pub inputs: CreditInputs,
    pub plan: CreditPlan,
}

impl ResolvedCredit {
    /// Checks a set of inputs against the scenario required by `kind`
    /// (`"diff"` or `"annuity"`).
    pub fn new(kind: Option<&str>, inputs: CreditInputs) -> Result<Self> {
        let plan = match kind {
            Some("diff") => {
                if inputs.principal.is_none() || inputs.term.is_none() || inputs.interest.is_none()
                {
                    return Err(CreditError::invalid(
                        "differentiated credit needs principal, term and interest",
                    ));
                }
                CreditPlan::Differentiated
            }
            Some("annuity") => {
                if inputs.interest.is_none() {
                    return Err(CreditError::invalid("annuity credit needs interest"));
                }
                let missing: Vec<Target> = [
                    (Target::Payment, inputs.payment.is_none()),
                    (Target::Term, inputs.term.is_none()),
                    (Target::Principal, inputs.principal.is_none()),
                ]
                .into_iter()
                .filter_map(|(target, absent)| absent.then_some(target))
                .collect();

                match missing.as_slice() {
                    [target] => CreditPlan::Annuity(*target),
                    [] => {
                        return Err(CreditError::invalid(
                            "annuity credit has nothing left to solve for",
                        ))
                    }
                    _ => {
                        return Err(CreditError::invalid(format!(
                            "annuity credit has {} unknowns, expected one",
                            missing.len()
                        )))
                    }
                }
            }
            Some(other) => {
                return Err(CreditError::invalid(format!(
                    "unknown calculation type '{}'",
                    other
                )))
            }
            None => return Err(CreditError::invalid("calculation type not given")),
        };
        debug!("resolved plan {:?} from {:?}", plan, inputs);
        Ok(Self { inputs, plan })
    }
}

/// Builds a `ResolvedCredit` from `--key=value` arguments. Unknown keys and
/// arguments of any other shape are skipped; an empty value counts as not given.
pub fn resolve<I, S>(args: I) -> Result<ResolvedCredit>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kind: Option<String> = None;
    let mut inputs = CreditInputs::default();

    for arg in args {
        let arg = arg.as_ref();
        let Some((key, value)) = arg.strip_prefix("--").and_then(|a| a.split_once('=')) else {
            trace!("skipping argument not of the form --key=value: {}", arg);
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            trace!("{} given without a value", key);
            continue;
        }

        match key {
            "type" => kind = Some(value.to_string()),
            "principal" => inputs.principal = Some(parse_whole(key, value)?),
            "term" => {
                let term: u32 = parse_whole(key, value)?;
                if term == 0 {
                    return Err(CreditError::invalid("term must be at least one month"));
                }
                inputs.term = Some(term);
            }
            "interest" => {
                inputs = inputs.with_annual_percent(parse_amount(key, value)?);
            }
            "payment" => inputs.payment = Some(parse_amount(key, value)?),
            _ => trace!("ignoring unknown parameter {}", key),
        }
    }

    ResolvedCredit::new(kind.as_deref(), inputs)
}

fn parse_whole<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CreditError::invalid(format!("{} must be a whole number, got '{}'", key, value)))
}

fn parse_amount(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0. => Ok(amount),
        _ => Err(CreditError::invalid(format!(
            "{} must be a non-negative number, got '{}'",
            key, value
        ))),
    }
}
