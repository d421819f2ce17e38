//! Loan operations over plain account state. Each operation validates
//! everything up front and writes only after the last fallible step, so a
//! rejected call leaves every account it was handed unchanged.

pub mod borrow;
pub mod repay;
pub mod harvest;
pub mod liquidate;
pub mod withdraw;

pub use borrow::*;
pub use repay::*;
pub use harvest::*;
pub use liquidate::*;
pub use withdraw::*;
