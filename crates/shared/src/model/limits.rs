use crate::{
    errors::LimitsError,
    model::money::Money,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionLimitModel {
    pub limit_id: i32,
    pub min_amount: i64,
    pub max_amount: i64,
    pub max_daily_amount: i64,
    pub updated_at: Option<NaiveDateTime>,
}

/// Transfer amount bounds. Always read fresh, the configuration may change
/// between an inquiry and its payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limits {
    min_amount: Money,
    max_amount: Money,
    max_daily_amount: Money,
}

impl Limits {
    pub fn new(
        min_amount: Money,
        max_amount: Money,
        max_daily_amount: Money,
    ) -> Result<Self, LimitsError> {
        if min_amount > max_amount {
            return Err(LimitsError::MinAboveMax {
                min: min_amount.value(),
                max: max_amount.value(),
            });
        }

        Ok(Self {
            min_amount,
            max_amount,
            max_daily_amount,
        })
    }

    pub fn min_amount(&self) -> Money {
        self.min_amount
    }

    pub fn max_amount(&self) -> Money {
        self.max_amount
    }

    pub fn max_daily_amount(&self) -> Money {
        self.max_daily_amount
    }

    pub fn can_transfer(&self, amount: Money) -> bool {
        amount >= self.min_amount && amount <= self.max_amount && amount <= self.max_daily_amount
    }
}

impl TryFrom<TransactionLimitModel> for Limits {
    type Error = LimitsError;

    fn try_from(model: TransactionLimitModel) -> Result<Self, Self::Error> {
        Limits::new(
            Money::new(model.min_amount)?,
            Money::new(model.max_amount)?,
            Money::new(model.max_daily_amount)?,
        )
    }
}
