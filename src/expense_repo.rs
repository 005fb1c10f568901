use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::tag_repo::Tag;

#[async_trait]
pub trait ExpenseRepo: Sync + Send {
    /// Persists a new expense together with its tag links as one unit and
    /// returns the generated expense id.
    async fn create_expense(&self, new_expense: NewExpense) -> Result<i64, ExpenseRepoError>;

    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError>;

    /// Tags linked to an expense, in link insertion order. An expense with
    /// no links yields an empty vec.
    async fn get_expense_tags(&self, expense_id: i64) -> Result<Vec<Tag>, ExpenseRepoError>;
}

#[derive(Error, Debug)]
pub enum ExpenseRepoError {
    #[error("Expense with id {0} not found")]
    ExpenseNotFound(i64),
    #[error("Category with id {0} not found")]
    CategoryNotFound(i64),
    #[error("Tag with id {0} not found")]
    TagNotFound(i64),
    #[error("Expense references unknown tag {0}")]
    UnknownTag(i64),
    #[error("Expense amount must be positive")]
    NonPositiveAmount,
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Expense id {0} must be positive")]
    InvalidId(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Denormalized view of one expense: the category reference resolved to its
/// name (empty when uncategorized) and the tag links resolved to tag names.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Expense {
    pub id: i64,
    pub category_name: String,
    pub amount: Decimal,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub location: String,
    pub notes: String,
    pub tag_names: Vec<String>,
}

impl Expense {
    pub fn new(
        id: i64,
        category_name: String,
        amount: Decimal,
        date: NaiveDate,
        location: String,
        notes: String,
        tag_names: Vec<String>,
    ) -> Expense {
        Expense {
            id,
            category_name,
            amount,
            day: date.day(),
            month: date.month(),
            year: date.year(),
            location,
            notes,
            tag_names,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewExpense {
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub location: String,
    pub notes: String,
    pub tag_ids: Vec<i64>,
}

impl NewExpense {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        category_id: Option<i64>,
        amount: Decimal,
        year: i32,
        month: u32,
        day: u32,
        location: String,
        notes: String,
        tag_ids: Vec<i64>,
    ) -> NewExpense {
        NewExpense {
            category_id,
            amount,
            year,
            month,
            day,
            location,
            notes,
            tag_ids,
        }
    }

    /// Checks the amount and date invariants and returns the composed
    /// calendar date.
    pub fn validate(&self) -> Result<NaiveDate, ExpenseRepoError> {
        if self.amount <= Decimal::ZERO {
            return Err(ExpenseRepoError::NonPositiveAmount);
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            ExpenseRepoError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )
    }

    /// Requested tag ids with duplicates removed, first occurrence wins.
    pub fn deduped_tag_ids(&self) -> Vec<i64> {
        let mut seen = HashSet::new();
        self.tag_ids
            .iter()
            .copied()
            .filter(|tag_id| seen.insert(*tag_id))
            .collect()
    }
}
