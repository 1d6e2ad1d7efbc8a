use crate::model::money::Money;
use serde::{Deserialize, Serialize};

/// Account status codes reported by the core banking system.
///
/// The set is closed: any code outside the table lands in `Unknown` and is
/// treated as inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Closed,
    Matured,
    NewToday,
    Reactivated,
    Dormant,
    Blocked,
    Unknown(String),
}

impl AccountStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => AccountStatus::Active,
            "2" => AccountStatus::Closed,
            "3" => AccountStatus::Matured,
            "4" => AccountStatus::NewToday,
            "6" => AccountStatus::Reactivated,
            "7" => AccountStatus::Dormant,
            "9" => AccountStatus::Blocked,
            other => AccountStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self,
            AccountStatus::Active | AccountStatus::NewToday | AccountStatus::Reactivated
        )
    }
}

/// Account snapshot as reported by the core banking system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub account_number: String,
    pub name: String,
    pub status: AccountStatus,
    pub balance: Money,
    pub min_balance: Money,
    pub available_balance: Money,
    pub cif: String,
    pub currency: String,
    pub branch_code: String,
}

impl Account {
    pub fn is_account_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::active("1", true)]
    #[case::new_today("4", true)]
    #[case::reactivated("6", true)]
    #[case::closed("2", false)]
    #[case::matured("3", false)]
    #[case::dormant("7", false)]
    #[case::blocked("9", false)]
    #[case::unlisted("5", false)]
    #[case::unlisted_eight("8", false)]
    #[case::empty("", false)]
    #[case::garbage("ACTIVE", false)]
    fn test_status_default_deny(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(AccountStatus::from_code(code).is_active(), expected);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        assert_eq!(
            AccountStatus::from_code("X"),
            AccountStatus::Unknown("X".to_string())
        );
    }
}
