use chrono::{Datelike, NaiveDate};
use expense_repo::expense_repo::NewExpense;
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use rust_decimal::Decimal;

#[allow(dead_code)]
pub struct NewExpenseGenerator {
    category_id: Option<i64>,
    amount: Option<Decimal>,
    date: Option<NaiveDate>,
    tag_ids: Vec<i64>,
}

#[allow(dead_code)]
impl NewExpenseGenerator {
    pub fn new() -> NewExpenseGenerator {
        NewExpenseGenerator {
            category_id: None,
            amount: None,
            date: None,
            tag_ids: Vec::new(),
        }
    }

    pub fn with_category(mut self, category_id: i64) -> NewExpenseGenerator {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> NewExpenseGenerator {
        self.amount = Some(amount);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> NewExpenseGenerator {
        self.date = Some(date);
        self
    }

    pub fn with_tag_ids(mut self, tag_ids: Vec<i64>) -> NewExpenseGenerator {
        self.tag_ids = tag_ids;
        self
    }

    pub fn generate(&self) -> NewExpense {
        let amount = self
            .amount
            .unwrap_or_else(|| Decimal::from(1 + Faker.fake::<u16>() as i64));
        let date = self.date.unwrap_or_else(|| Faker.fake::<NaiveDate>());
        NewExpense::new(
            self.category_id,
            amount,
            date.year(),
            date.month(),
            date.day(),
            CityName().fake(),
            Sentence(5..10).fake(),
            self.tag_ids.clone(),
        )
    }
}
