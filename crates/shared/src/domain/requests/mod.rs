pub mod corebanking;
pub mod notification;
pub mod session;
pub mod transfer;
