use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use crate::tag_repo::Tag;
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct ExpenseEntry {
    id: i64,
    category_id: Option<i64>,
    amount: Decimal,
    date: NaiveDate,
    location: String,
    notes: String,
}

pub struct SQLxExpenseRepo {
    pool: Pool<Postgres>,
}

impl SQLxExpenseRepo {
    pub(crate) fn new(pool: Pool<Postgres>) -> SQLxExpenseRepo {
        SQLxExpenseRepo { pool }
    }

    #[instrument(skip(self))]
    async fn get_expense_entry(
        &self,
        expense_id: i64,
    ) -> Result<Option<ExpenseEntry>, ExpenseRepoError> {
        let entry: Option<ExpenseEntry> = sqlx::query_as(
            "SELECT id, category_id, amount, date, location, notes FROM expense WHERE id = $1",
        )
        .bind(expense_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get expense {}", expense_id))?;
        Ok(entry)
    }

    async fn tag_exists(&self, tag_id: i64) -> Result<bool, ExpenseRepoError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM tag WHERE id = $1")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to look up tag {}", tag_id))?;
        Ok(found.is_some())
    }

    async fn category_exists(&self, category_id: i64) -> Result<bool, ExpenseRepoError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM category WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to look up category {}", category_id))?;
        Ok(found.is_some())
    }

    #[instrument(skip(self))]
    async fn get_linked_tag_ids(&self, expense_id: i64) -> Result<Vec<i64>, ExpenseRepoError> {
        let tag_ids: Vec<i64> = sqlx::query_scalar(
            "SELECT tag_id FROM expense_tags WHERE expense_id = $1 ORDER BY id",
        )
        .bind(expense_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Unable to get tag links for expense {}", expense_id))?;
        Ok(tag_ids)
    }
}

#[async_trait]
impl ExpenseRepo for SQLxExpenseRepo {
    #[instrument(skip(self, new_expense))]
    async fn create_expense(&self, new_expense: NewExpense) -> Result<i64, ExpenseRepoError> {
        let date = new_expense.validate()?;
        let tag_ids = new_expense.deduped_tag_ids();

        for &tag_id in &tag_ids {
            if !self.tag_exists(tag_id).await? {
                return Err(ExpenseRepoError::UnknownTag(tag_id));
            }
        }
        if let Some(category_id) = new_expense.category_id {
            if !self.category_exists(category_id).await? {
                return Err(ExpenseRepoError::CategoryNotFound(category_id));
            }
        }

        // The expense row and its tag links commit as one unit.
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Unable to begin transaction")?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO expense (category_id, amount, date, location, notes) VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(new_expense.category_id)
        .bind(new_expense.amount)
        .bind(date)
        .bind(&new_expense.location)
        .bind(&new_expense.notes)
        .fetch_one(&mut *tx)
        .await
        .context("Unable to insert expense")?;

        for &tag_id in &tag_ids {
            sqlx::query("INSERT INTO expense_tags (expense_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("Unable to link tag {} to expense {}", tag_id, id))?;
        }

        tx.commit().await.context("Unable to commit expense")?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_expense(&self, expense_id: i64) -> Result<Expense, ExpenseRepoError> {
        if expense_id < 1 {
            return Err(ExpenseRepoError::InvalidId(expense_id));
        }

        let entry = self
            .get_expense_entry(expense_id)
            .await?
            .ok_or(ExpenseRepoError::ExpenseNotFound(expense_id))?;

        let category_name = match entry.category_id {
            Some(category_id) => {
                let name: Option<String> =
                    sqlx::query_scalar("SELECT name FROM category WHERE id = $1")
                        .bind(category_id)
                        .fetch_optional(&self.pool)
                        .await
                        .with_context(|| format!("Unable to get category {}", category_id))?;
                name.ok_or(ExpenseRepoError::CategoryNotFound(category_id))?
            }
            None => String::new(),
        };

        let tag_names = self
            .get_expense_tags(expense_id)
            .await?
            .into_iter()
            .map(|tag| tag.name)
            .collect();

        Ok(Expense::new(
            entry.id,
            category_name,
            entry.amount,
            entry.date,
            entry.location,
            entry.notes,
            tag_names,
        ))
    }

    #[instrument(skip(self))]
    async fn get_expense_tags(&self, expense_id: i64) -> Result<Vec<Tag>, ExpenseRepoError> {
        if expense_id < 1 {
            return Err(ExpenseRepoError::InvalidId(expense_id));
        }

        let tag_ids = self.get_linked_tag_ids(expense_id).await?;

        let mut tags = Vec::with_capacity(tag_ids.len());
        for tag_id in tag_ids {
            let row: Option<(i64, String)> =
                sqlx::query_as("SELECT id, name FROM tag WHERE id = $1")
                    .bind(tag_id)
                    .fetch_optional(&self.pool)
                    .await
                    .with_context(|| format!("Unable to get tag {}", tag_id))?;
            let (id, name) = row.ok_or(ExpenseRepoError::TagNotFound(tag_id))?;
            tags.push(Tag::new(id, name));
        }

        Ok(tags)
    }
}
