pub mod corebanking;
pub mod notification;
pub mod sequence;
pub mod transfer;
