pub mod admin;
pub mod scope;
pub mod loan;

pub use admin::*;
pub use scope::*;
pub use loan::*;
