//! # cdspricer
//!
//! An implementation of the ISDA CDS Standard Model: zero-curve and
//! credit-curve bootstrapping, fee/contingent leg valuation with the
//! standard closed-form integration, and a pricer producing PV, par
//! spread, upfront, RPV01, CS01, and DV01.
//!
//! This crate is a **facade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cds-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use cdspricer::pricing::{CdsContract, CdsPricer};
//! use cdspricer::time::{Date, Tenor, WeekendsOnly};
//!
//! let trade_date = Date::from_ymd(2022, 8, 31)?;
//! let maturity = Date::from_ymd(2026, 12, 20)?;
//! let tenors: Vec<Tenor> = ["6M", "1Y", "3Y", "5Y"]
//!     .iter()
//!     .map(|t| t.parse())
//!     .collect::<Result<_, _>>()?;
//! let rates = [0.0117, 0.0176, 0.0269, 0.0286];
//!
//! let pricer = CdsPricer::from_par_spread(
//!     trade_date, &tenors, &rates, maturity,
//!     0.0065,            // traded par spread
//!     0.40,              // recovery
//!     Box::new(WeekendsOnly),
//! )?;
//! let contract = CdsContract::standard(
//!     trade_date, maturity,
//!     100,               // running coupon in basis points
//!     10_000_000.0, 0.40, true, &WeekendsOnly,
//! )?;
//! let result = pricer.price(&contract)?;
//! assert!(result.pv_dirty < 0.0); // paying 100bp for 65bp protection
//! # Ok::<(), cdspricer::core::errors::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use cds_core as core;

/// Date, calendar, day count, IMM, and schedule types.
pub use cds_time as time;

/// Root finding, interpolation, and stable kernels.
pub use cds_math as math;

/// Zero and credit curves with their bootstrap.
pub use cds_curves as curves;

/// Leg valuation and the pricer assembly.
pub use cds_pricing as pricing;
