use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense, fixed closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Home,
    Personal,
    Family,
    Other,
}

impl ExpenseCategory {
    /// All categories, in the order they appear in the category select
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Home,
        ExpenseCategory::Personal,
        ExpenseCategory::Family,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Home => "Home",
            ExpenseCategory::Personal => "Personal",
            ExpenseCategory::Family => "Family",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Home" => Ok(ExpenseCategory::Home),
            "Personal" => Ok(ExpenseCategory::Personal),
            "Family" => Ok(ExpenseCategory::Family),
            "Other" => Ok(ExpenseCategory::Other),
            _ => Err(UnknownVariant),
        }
    }
}

/// Billing type of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    Prepaid,
    Postpaid,
}

impl ExpenseType {
    /// All types, in the order they appear in the type select
    pub const ALL: [ExpenseType; 2] = [ExpenseType::Prepaid, ExpenseType::Postpaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::Prepaid => "Prepaid",
            ExpenseType::Postpaid => "Postpaid",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prepaid" => Ok(ExpenseType::Prepaid),
            "Postpaid" => Ok(ExpenseType::Postpaid),
            _ => Err(UnknownVariant),
        }
    }
}

/// Returned when a select value does not name a known enum variant
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown enum variant")
    }
}

impl std::error::Error for UnknownVariant {}

/// A persisted expense record as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Due date in YYYY-MM-DD format
    pub due_date: String,
    pub description: String,
}

/// Request body for creating an expense.
///
/// Only ever built from a form value that passed every field validator,
/// so every field here is already trimmed, parsed and concrete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExpenseBody {
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Due date in YYYY-MM-DD format
    pub due_date: String,
    pub description: String,
}

/// Envelope every backend endpoint wraps its payload in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct GenericResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    pub message: String,
    pub status: bool,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in ExpenseCategory::ALL {
            assert_eq!(category.as_str().parse::<ExpenseCategory>(), Ok(category));
        }
        assert!("Groceries".parse::<ExpenseCategory>().is_err());
        assert!("".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn expense_type_round_trips_through_str() {
        for expense_type in ExpenseType::ALL {
            assert_eq!(expense_type.as_str().parse::<ExpenseType>(), Ok(expense_type));
        }
        assert!("Monthly".parse::<ExpenseType>().is_err());
    }

    #[test]
    fn add_expense_body_serializes_with_wire_names() {
        let body = AddExpenseBody {
            title: "Rent".to_string(),
            amount: 1200.0,
            category: ExpenseCategory::Home,
            expense_type: ExpenseType::Prepaid,
            due_date: "2026-08-26".to_string(),
            description: "Monthly rent".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Rent");
        assert_eq!(json["amount"], 1200.0);
        assert_eq!(json["category"], "Home");
        assert_eq!(json["type"], "Prepaid");
        assert_eq!(json["dueDate"], "2026-08-26");
        assert_eq!(json["description"], "Monthly rent");
    }

    #[test]
    fn generic_response_parses_backend_envelope() {
        let json = r#"{
            "Data": null,
            "Message": "Expense created",
            "Status": true,
            "Code": "201"
        }"#;

        let response: GenericResponse<Expense> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.message, "Expense created");
        assert!(response.status);
        assert_eq!(response.code, "201");
    }

    #[test]
    fn generic_response_parses_expense_payload() {
        let json = r#"{
            "Data": {
                "id": 7,
                "title": "Rent",
                "amount": 1200.0,
                "category": "Home",
                "type": "Prepaid",
                "dueDate": "2026-08-26",
                "description": "Monthly rent"
            },
            "Message": "",
            "Status": true,
            "Code": "201"
        }"#;

        let response: GenericResponse<Expense> = serde_json::from_str(json).unwrap();
        let expense = response.data.unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.category, ExpenseCategory::Home);
        assert_eq!(expense.expense_type, ExpenseType::Prepaid);
    }
}
