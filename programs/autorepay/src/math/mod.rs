pub mod fixed_point;
pub mod interest;
pub mod rewards;
pub mod valuation;
pub mod fees;

pub use fixed_point::*;
pub use interest::*;
pub use rewards::*;
pub use valuation::*;
pub use fees::*;
