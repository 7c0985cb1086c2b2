//! Budget and expense service

use crate::client::api_client;
use crate::errors::ServiceError;
use budget_http::client::{ApiClient, ClientError};
use budget_http::types::{
    BudgetSetup, BudgetSummary, Expense, ExpenseCreate, MessageResponse,
};

#[derive(Clone)]
pub struct BudgetService {
    client: ApiClient,
}

impl BudgetService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_session() -> Result<Self, ClientError> {
        Ok(Self::new(api_client()?))
    }

    /// Submit the first budget. Checked locally before sending.
    pub async fn setup(&self, budget: &BudgetSetup) -> Result<MessageResponse, ServiceError> {
        budget.validate()?;
        Ok(self.client.setup_budget(budget).await?)
    }

    pub async fn update(&self, budget: &BudgetSetup) -> Result<MessageResponse, ServiceError> {
        budget.validate()?;
        Ok(self.client.update_budget(budget).await?)
    }

    pub async fn summary(&self) -> Result<BudgetSummary, ServiceError> {
        Ok(self.client.budget_summary().await?)
    }

    pub async fn expenses(&self) -> Result<Vec<Expense>, ServiceError> {
        Ok(self.client.list_expenses().await?)
    }

    pub async fn add_expense(&self, expense: &ExpenseCreate) -> Result<MessageResponse, ServiceError> {
        expense.validate()?;
        Ok(self.client.add_expense(expense).await?)
    }

    pub async fn delete_expense(&self, expense_id: i64) -> Result<MessageResponse, ServiceError> {
        Ok(self.client.delete_expense(expense_id).await?)
    }
}
