pub mod create_scope;
pub mod issue_position;
pub mod update_scope_valuation;
pub mod transfer_position;
pub mod deposit_yield;
pub mod claim_yield;

pub use create_scope::*;
pub use issue_position::*;
pub use update_scope_valuation::*;
pub use transfer_position::*;
pub use deposit_yield::*;
pub use claim_yield::*;
