//! Request and response payloads exchanged with the budgeting backend

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum password length accepted by the reset endpoint
pub const MIN_PASSWORD_LEN: usize = 8;

/// Client-side validation failure, reported before any request is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Income must be greater than zero")]
    NonPositiveIncome,

    #[error("Amount for {0} cannot be negative")]
    NegativeAmount(String),

    #[error("Amount for {0} must be a finite number")]
    NonFiniteAmount(String),

    #[error("Total allocation ({allocated:.2}) exceeds income ({income:.2})")]
    AllocationExceedsIncome { allocated: f64, income: f64 },

    #[error("Password must be at least {} characters long", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// Generic `{"message": ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Username/password login. `username` also accepts an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Account creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account creation response; carries a token so the new user is signed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

impl ResetPasswordRequest {
    /// Check the password length rule the backend enforces
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    pub username: String,
    pub password: String,
}

/// Monthly budget: income, savings goal and per-category allocations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetSetup {
    pub income: f64,
    pub savings_goal: f64,
    pub categories: BTreeMap<String, f64>,
}

impl BudgetSetup {
    /// Sum of all category allocations plus the savings goal
    pub fn total_allocated(&self) -> f64 {
        self.categories.values().sum::<f64>() + self.savings_goal
    }

    /// Validate the budget before submitting it
    pub fn validate(&self) -> Result<(), ValidationError> {
        let amounts = [("income", &self.income), ("savings goal", &self.savings_goal)]
            .into_iter()
            .chain(self.categories.iter().map(|(name, amount)| (name.as_str(), amount)));
        for (name, amount) in amounts {
            if !amount.is_finite() {
                return Err(ValidationError::NonFiniteAmount(name.to_string()));
            }
        }

        if self.income <= 0.0 {
            return Err(ValidationError::NonPositiveIncome);
        }
        if self.savings_goal < 0.0 {
            return Err(ValidationError::NegativeAmount("savings goal".into()));
        }
        if let Some((name, _)) = self.categories.iter().find(|(_, amount)| **amount < 0.0) {
            return Err(ValidationError::NegativeAmount(name.clone()));
        }

        let allocated = self.total_allocated();
        if allocated > self.income {
            return Err(ValidationError::AllocationExceedsIncome {
                allocated,
                income: self.income,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl ExpenseCreate {
    /// The backend checks the category budget; only the amount is checked here
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount(self.category.clone()));
        }
        if self.amount < 0.0 {
            return Err(ValidationError::NegativeAmount(self.category.clone()));
        }
        Ok(())
    }
}

/// Recorded expense, newest first when listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub category: String,
    pub amount_spent: f64,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// Dashboard summary. `expenses` maps each category to the amount spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub income: f64,
    pub savings_goal: f64,
    pub categories: BTreeMap<String, f64>,
    pub expenses: BTreeMap<String, f64>,
    pub remaining: f64,
}

impl BudgetSummary {
    /// Unspent allocation for a category, if the category exists
    pub fn category_remaining(&self, category: &str) -> Option<f64> {
        let allocated = self.categories.get(category)?;
        let spent = self.expenses.get(category).copied().unwrap_or_default();
        Some(allocated - spent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}
