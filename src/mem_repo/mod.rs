use crate::category_repo::{Category, CategoryRepo};
use crate::expense_repo::ExpenseRepo;
use crate::tag_repo::{Tag, TagRepo};
use anyhow::anyhow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod category_repo;
mod expense_repo;
mod tag_repo;

pub(crate) struct ExpenseEntry {
    pub(crate) id: i64,
    pub(crate) category_id: Option<i64>,
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) location: String,
    pub(crate) notes: String,
}

pub(crate) struct ExpenseTagEntry {
    pub(crate) expense_id: i64,
    pub(crate) tag_id: i64,
}

pub(crate) struct State {
    pub(crate) categories: HashMap<i64, Category>,
    pub(crate) tags: HashMap<i64, Tag>,
    pub(crate) expenses: HashMap<i64, ExpenseEntry>,
    // link rows in insertion order
    pub(crate) expense_tags: Vec<ExpenseTagEntry>,
    pub(crate) next_category_id: i64,
    pub(crate) next_tag_id: i64,
    pub(crate) next_expense_id: i64,
}

// One state shared by all three repos, so expense writes can check the
// category and tag tables they reference.
#[derive(Clone)]
pub(crate) struct SharedState(Arc<RwLock<State>>);

impl SharedState {
    fn new() -> SharedState {
        let state = State {
            categories: HashMap::new(),
            tags: HashMap::new(),
            expenses: HashMap::new(),
            expense_tags: Vec::new(),
            next_category_id: 1,
            next_tag_id: 1,
            next_expense_id: 1,
        };
        SharedState(Arc::new(RwLock::new(state)))
    }

    pub(crate) fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.0.read().map_err(|_| anyhow!("Unable to acquire lock"))
    }

    pub(crate) fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.0
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

pub fn create_repos() -> (Arc<dyn CategoryRepo>, Arc<dyn TagRepo>, Arc<dyn ExpenseRepo>) {
    let state = SharedState::new();

    let category_repo = category_repo::MemCategoryRepo::new(state.clone());
    let tag_repo = tag_repo::MemTagRepo::new(state.clone());
    let expense_repo = expense_repo::MemExpenseRepo::new(state);

    (
        Arc::new(category_repo),
        Arc::new(tag_repo),
        Arc::new(expense_repo),
    )
}
