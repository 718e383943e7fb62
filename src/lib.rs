pub mod credit;
pub mod error;
pub mod params;
pub mod report;

pub use credit::{calculate, CreditResult};
pub use error::{CreditError, Result};
pub use params::{resolve, CreditInputs, CreditPlan, ResolvedCredit, Target};
