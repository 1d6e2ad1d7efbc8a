mod logs;
mod mark;
mod shutdown;

pub use self::logs::Logger;
pub use self::mark::mask_account_number;
pub use self::shutdown::shutdown_signal;
