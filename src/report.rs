use crate::credit::CreditResult;
use std::fmt;

pub const USAGE: &str = "
    Calculate Annuity/Differentiated Payment
    by passing necessary values:

    Usage: On a single line type,
        credit_calculator --<parameter>=<value> --<parameter>=<value> and so on

    Example 1:           Example 2:         Example 3:       Example 4:
    --type=diff          --type=annuity     --type=annuity   --type=annuity
    --principal=1000000  --principal=50000  --payment=8722   --principal=
    --term=10            --term=8           --term=120       --payment=
    --interest=10        --interest=7.8     --interest=5.6   --interest=

    ^                    ^                  ^                ^
    Calculates           Calculates         Calculates       Calculates
    Variable             Annuity            Credit           Credit
    Payments             Monthly            Principal        Term

    --term, in months. Convert years to months.
    --interest, type without the percentage. Can be a floating value.
";

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// "2 years and 3 months", "1 year", "0 years and 8 months"
pub fn describe_term(years: u32, months: u32) -> String {
    if months == 0 {
        plural(years, "year")
    } else {
        format!("{} and {}", plural(years, "year"), plural(months, "month"))
    }
}

impl fmt::Display for CreditResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditResult::Differentiated { payments, .. } => {
                for (month, payment) in payments.iter().enumerate() {
                    writeln!(f, "Month {}: paid out {}", month + 1, payment)?;
                }
                writeln!(f)?;
            }
            CreditResult::Payment { payment, .. } => {
                writeln!(f, "Your annuity payment = {}!", payment)?;
            }
            CreditResult::Term { .. } => {
                let years = self.years().unwrap_or_default();
                let months = self.months().unwrap_or_default();
                writeln!(f, "You need {} to repay this credit!", describe_term(years, months))?;
            }
            CreditResult::Principal { principal, .. } => {
                writeln!(f, "Your credit principal = {}!", principal)?;
            }
        }
        write!(f, "Overpayment = {}", self.overpayment())
    }
}

#[cfg(test)]
mod tests {
    use super::{describe_term, USAGE};
    use crate::credit::CreditResult;
    use test_log::test;

    #[test]
    fn test_describe_term() {
        assert_eq!(describe_term(0, 1), "0 years and 1 month");
        assert_eq!(describe_term(0, 8), "0 years and 8 months");
        assert_eq!(describe_term(1, 0), "1 year");
        assert_eq!(describe_term(2, 0), "2 years");
        assert_eq!(describe_term(1, 1), "1 year and 1 month");
        assert_eq!(describe_term(8, 2), "8 years and 2 months");
    }

    #[test]
    fn test_differentiated_report() {
        let result = CreditResult::Differentiated {
            payments: vec![65750, 65344],
            overpayment: 1094,
        };
        assert_eq!(
            result.to_string(),
            "Month 1: paid out 65750\nMonth 2: paid out 65344\n\nOverpayment = 1094"
        );
    }

    #[test]
    fn test_annuity_reports() {
        let payment = CreditResult::Payment {
            payment: 6435,
            overpayment: 1480,
        };
        assert_eq!(payment.to_string(), "Your annuity payment = 6435!\nOverpayment = 1480");

        let principal = CreditResult::Principal {
            principal: 800019,
            overpayment: 246621,
        };
        assert_eq!(
            principal.to_string(),
            "Your credit principal = 800019!\nOverpayment = 246621"
        );

        let term = CreditResult::Term {
            term: 98,
            overpayment: 470000,
        };
        assert_eq!(
            term.to_string(),
            "You need 8 years and 2 months to repay this credit!\nOverpayment = 470000"
        );

        let short = CreditResult::Term {
            term: 8,
            overpayment: 120,
        };
        assert_eq!(
            short.to_string(),
            "You need 0 years and 8 months to repay this credit!\nOverpayment = 120"
        );
    }

    #[test]
    fn test_usage_lists_every_scenario() {
        for example in ["--type=diff", "--principal=50000", "--payment=8722", "--principal="] {
            assert!(USAGE.contains(example), "missing {}", example);
        }
    }
}
