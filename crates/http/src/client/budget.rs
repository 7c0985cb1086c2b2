//! Budget and expense API client methods

use super::{ApiClient, ClientError};
use crate::types::{BudgetSetup, BudgetSummary, Expense, ExpenseCreate, MessageResponse};
use reqwest::Method;

impl ApiClient {
    /// Create the initial budget (replaces an existing one)
    pub async fn setup_budget(&self, budget: &BudgetSetup) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::POST, "/api/budget/setup").json(budget);
        self.execute(req).await
    }

    /// Update the budget. The backend refuses to cut a category below what
    /// has already been spent in it.
    pub async fn update_budget(
        &self,
        budget: &BudgetSetup,
    ) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::POST, "/api/budget/update").json(budget);
        self.execute(req).await
    }

    pub async fn budget_summary(&self) -> Result<BudgetSummary, ClientError> {
        let req = self.request(Method::GET, "/api/budget/summary");
        self.execute(req).await
    }

    /// List expenses, newest first
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ClientError> {
        let req = self.request(Method::GET, "/api/budget/expenses");
        self.execute(req).await
    }

    pub async fn add_expense(&self, expense: &ExpenseCreate) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::POST, "/api/budget/expense").json(expense);
        self.execute(req).await
    }

    pub async fn delete_expense(&self, expense_id: i64) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::DELETE, &format!("/api/budget/expense/{expense_id}"));
        self.execute(req).await
    }
}
