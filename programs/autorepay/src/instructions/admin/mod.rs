pub mod initialize_loan_vault;
pub mod update_loan_config;
pub mod set_paused;
pub mod deposit_liquidity;
pub mod withdraw_liquidity;
pub mod withdraw_insurance;

pub use initialize_loan_vault::*;
pub use update_loan_config::*;
pub use set_paused::*;
pub use deposit_liquidity::*;
pub use withdraw_liquidity::*;
pub use withdraw_insurance::*;
