use serde::{Deserialize, Serialize};

pub const EOD_STARTED: &str = "STARTED";
pub const STAND_IN_INACTIVE: &str = "N";

/// Live availability report from the core banking system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreStatus {
    pub system_date: String,
    pub status: String,
    pub stand_in_status: String,
}

impl CoreStatus {
    /// The ledger refuses new transfers while end of day runs without stand-in cover.
    pub fn is_eod_running(&self) -> bool {
        self.status == EOD_STARTED && self.stand_in_status == STAND_IN_INACTIVE
    }
}
