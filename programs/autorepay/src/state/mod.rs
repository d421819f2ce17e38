pub mod loan_vault;
pub mod loan_record;
pub mod loan_receipt;
pub mod reserve_pool;
pub mod supporter_scope;
pub mod supporter_position;

pub use loan_vault::*;
pub use loan_record::*;
pub use loan_receipt::*;
pub use reserve_pool::*;
pub use supporter_scope::*;
pub use supporter_position::*;
