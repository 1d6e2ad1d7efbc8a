pub mod sequence;
pub mod transfer;
