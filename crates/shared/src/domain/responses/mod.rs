mod api;
mod corebanking;
mod transfer;

pub use self::api::ApiResponse;
pub use self::corebanking::OverbookingResponse;
pub use self::transfer::{InquiryResponse, TransactionResponse};
