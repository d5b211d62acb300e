pub mod add_expense;
pub mod error_status;
pub mod expenses;
