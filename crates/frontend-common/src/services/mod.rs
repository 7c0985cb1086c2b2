//! Service facades used by the views

pub mod auth;
pub mod budget;
pub mod profile;

pub use auth::AuthService;
pub use budget::BudgetService;
pub use profile::ProfileService;
