use chrono::NaiveDate;
use std::fmt;

use crate::amount::parse_amount;
use crate::expense::{AddExpenseBody, ExpenseCategory, ExpenseType};
use crate::validate::{parse_form_date, Rule, ValidationError};

/// Minimum title length
pub const TITLE_MIN_LENGTH: usize = 3;
/// Minimum description length
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Smallest accepted amount
pub const AMOUNT_MIN_VALUE: f64 = 1.0;

/// One form control: its raw string value, whether the user has touched
/// it, and the rules it is checked against.
///
/// Select controls store the variant name ("" while unset), the date
/// control stores YYYY-MM-DD, and the amount control stores the already
/// formatted display string.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    rules: Vec<Rule>,
}

impl FieldState {
    fn new(value: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            value: value.into(),
            touched: false,
            rules,
        }
    }

    /// Replace the value and mark the field as touched
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    /// First failing rule, in declaration order
    pub fn error(&self) -> Option<ValidationError> {
        self.rules.iter().find_map(|rule| rule.check(&self.value))
    }

    pub fn is_invalid(&self) -> bool {
        self.error().is_some()
    }

    /// Error to render inline: only once the field has been touched
    pub fn visible_error(&self) -> Option<ValidationError> {
        if self.touched {
            self.error()
        } else {
            None
        }
    }
}

/// Mutable state of the add-expense form: six fields plus the
/// one-request-in-flight guard.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub title: FieldState,
    pub amount: FieldState,
    pub category: FieldState,
    pub expense_type: FieldState,
    pub due_date: FieldState,
    pub description: FieldState,
    pub submitting: bool,
}

impl ExpenseForm {
    /// Fresh form; the due date defaults to `today`, which is also the
    /// reference date for the past-date rule.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: FieldState::new(
                "",
                vec![Rule::Required, Rule::MinLength(TITLE_MIN_LENGTH)],
            ),
            amount: FieldState::new(
                "",
                vec![Rule::Required, Rule::MinValue(AMOUNT_MIN_VALUE)],
            ),
            category: FieldState::new("", vec![Rule::Required]),
            expense_type: FieldState::new("", vec![Rule::Required]),
            due_date: FieldState::new(
                today.format("%Y-%m-%d").to_string(),
                vec![Rule::Required, Rule::NoPastDate { today }],
            ),
            description: FieldState::new(
                "",
                vec![Rule::Required, Rule::MinLength(DESCRIPTION_MIN_LENGTH)],
            ),
            submitting: false,
        }
    }

    fn fields(&self) -> [&FieldState; 6] {
        [
            &self.title,
            &self.amount,
            &self.category,
            &self.expense_type,
            &self.due_date,
            &self.description,
        ]
    }

    fn fields_mut(&mut self) -> [&mut FieldState; 6] {
        [
            &mut self.title,
            &mut self.amount,
            &mut self.category,
            &mut self.expense_type,
            &mut self.due_date,
            &mut self.description,
        ]
    }

    /// True if any field fails any of its rules
    pub fn is_invalid(&self) -> bool {
        self.fields().iter().any(|field| field.is_invalid())
    }

    /// Make every field's error visible; used when a submit attempt is
    /// blocked by validation.
    pub fn mark_all_touched(&mut self) {
        for field in self.fields_mut() {
            field.touched = true;
        }
    }

    /// True when a submit attempt must be rejected without a network
    /// call: the form is invalid or a request is already in flight.
    pub fn submit_blocked(&self) -> bool {
        self.is_invalid() || self.submitting
    }

    /// Map the current values into the request body.
    ///
    /// Assumes validation already passed; anything malformed that still
    /// reaches this point becomes a `DtoError`, never a panic.
    pub fn to_body(&self) -> Result<AddExpenseBody, DtoError> {
        let amount = parse_amount(self.amount.value.trim()).ok_or(DtoError::InvalidAmount)?;
        let category = self
            .category
            .value
            .parse::<ExpenseCategory>()
            .map_err(|_| DtoError::UnknownCategory)?;
        let expense_type = self
            .expense_type
            .value
            .parse::<ExpenseType>()
            .map_err(|_| DtoError::UnknownType)?;
        let due_date = parse_form_date(self.due_date.value.trim()).ok_or(DtoError::InvalidDate)?;

        Ok(AddExpenseBody {
            title: self.title.value.trim().to_string(),
            amount,
            category,
            expense_type,
            due_date: due_date.format("%Y-%m-%d").to_string(),
            description: self.description.value.trim().to_string(),
        })
    }
}

/// Raised when a form value that should have been validated cannot be
/// mapped into the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtoError {
    InvalidAmount,
    UnknownCategory,
    UnknownType,
    InvalidDate,
}

impl fmt::Display for DtoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DtoError::InvalidAmount => write!(f, "Amount is not a valid number"),
            DtoError::UnknownCategory => write!(f, "Category is not set"),
            DtoError::UnknownType => write!(f, "Type is not set"),
            DtoError::InvalidDate => write!(f, "Due date is not a valid date"),
        }
    }
}

impl std::error::Error for DtoError {}
