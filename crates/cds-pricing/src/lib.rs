//! # cds-pricing
//!
//! The valuation layer of cdspricer: fee and contingent leg integration
//! over piecewise-constant forward hazard and discount rates, the credit
//! curve bootstrap from par CDS spreads, upfront/spread conversions, and
//! the [`CdsPricer`] assembly producing PV, par spread, RPV01, CS01, and
//! DV01.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod contingent_leg;
pub mod contract;
pub mod credit_bootstrap;
pub mod fee_leg;
pub mod pricer;
pub mod result;

mod timeline;

pub use contingent_leg::contingent_leg_pv;
pub use contract::{CdsContract, CdsConventions, STANDARD_RECOVERY};
pub use credit_bootstrap::bootstrap_credit_curve;
pub use fee_leg::fee_leg_pv;
pub use pricer::CdsPricer;
pub use result::CdsPricingResult;
