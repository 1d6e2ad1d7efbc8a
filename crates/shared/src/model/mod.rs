pub mod account;
pub mod core_status;
pub mod limits;
pub mod money;
pub mod sequence;
pub mod transaction;
