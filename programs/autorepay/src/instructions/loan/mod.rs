pub mod borrow;
pub mod repay;
pub mod harvest_and_repay;
pub mod liquidate;
pub mod withdraw_collateral;
pub mod transfer_receipt;

pub use borrow::*;
pub use repay::*;
pub use harvest_and_repay::*;
pub use liquidate::*;
pub use withdraw_collateral::*;
pub use transfer_receipt::*;
