use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use crate::mem_repo::{ExpenseEntry, ExpenseTagEntry, SharedState};
use crate::tag_repo::Tag;
use async_trait::async_trait;

pub struct MemExpenseRepo {
    state: SharedState,
}

impl MemExpenseRepo {
    pub(crate) fn new(state: SharedState) -> MemExpenseRepo {
        MemExpenseRepo { state }
    }
}

#[async_trait]
impl ExpenseRepo for MemExpenseRepo {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<i64, ExpenseRepoError> {
        let date = new_expense.validate()?;
        let tag_ids = new_expense.deduped_tag_ids();

        // Reference checks and inserts happen under one write lock, so the
        // expense row and its links appear together or not at all.
        let mut write_guard = self.state.write_lock()?;

        for &tag_id in &tag_ids {
            if !write_guard.tags.contains_key(&tag_id) {
                return Err(ExpenseRepoError::UnknownTag(tag_id));
            }
        }
        if let Some(category_id) = new_expense.category_id {
            if !write_guard.categories.contains_key(&category_id) {
                return Err(ExpenseRepoError::CategoryNotFound(category_id));
            }
        }

        let id = write_guard.next_expense_id;
        write_guard.next_expense_id += 1;
        write_guard.expenses.insert(
            id,
            ExpenseEntry {
                id,
                category_id: new_expense.category_id,
                amount: new_expense.amount,
                date,
                location: new_expense.location,
                notes: new_expense.notes,
            },
        );
        for &tag_id in &tag_ids {
            write_guard.expense_tags.push(ExpenseTagEntry {
                expense_id: id,
                tag_id,
            });
        }

        Ok(id)
    }

    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError> {
        if expense_id < 1 {
            return Err(ExpenseRepoError::InvalidId(expense_id));
        }

        let read_guard = self.state.read_lock()?;

        let entry = read_guard
            .expenses
            .get(&expense_id)
            .ok_or(ExpenseRepoError::ExpenseNotFound(expense_id))?;

        let category_name = match entry.category_id {
            Some(category_id) => read_guard
                .categories
                .get(&category_id)
                .map(|category| category.name.clone())
                .ok_or(ExpenseRepoError::CategoryNotFound(category_id))?,
            None => String::new(),
        };

        let mut tag_names = Vec::new();
        for link in read_guard
            .expense_tags
            .iter()
            .filter(|link| link.expense_id == expense_id)
        {
            let tag = read_guard
                .tags
                .get(&link.tag_id)
                .ok_or(ExpenseRepoError::TagNotFound(link.tag_id))?;
            tag_names.push(tag.name.clone());
        }

        Ok(Expense::new(
            entry.id,
            category_name,
            entry.amount,
            entry.date,
            entry.location.clone(),
            entry.notes.clone(),
            tag_names,
        ))
    }

    async fn get_expense_tags(&self, expense_id: i64) -> Result<Vec<Tag>, ExpenseRepoError> {
        if expense_id < 1 {
            return Err(ExpenseRepoError::InvalidId(expense_id));
        }

        let read_guard = self.state.read_lock()?;

        let mut tags = Vec::new();
        for link in read_guard
            .expense_tags
            .iter()
            .filter(|link| link.expense_id == expense_id)
        {
            let tag = read_guard
                .tags
                .get(&link.tag_id)
                .cloned()
                .ok_or(ExpenseRepoError::TagNotFound(link.tag_id))?;
            tags.push(tag);
        }

        Ok(tags)
    }
}
