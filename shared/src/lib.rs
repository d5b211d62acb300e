pub mod amount;
pub mod expense;
pub mod form;
pub mod validate;

pub use amount::{format_amount_input, parse_amount};
pub use expense::{
    AddExpenseBody, Expense, ExpenseCategory, ExpenseType, GenericResponse,
};
pub use form::{DtoError, ExpenseForm, FieldState};
pub use validate::{Rule, ValidationError};
