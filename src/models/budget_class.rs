//! Budget class model
//!
//! A budget class is a named income or expense category with a list of
//! keywords that other parts of the system match transactions against.
//! Classes are built once while parsing the configuration and never change
//! afterwards, so the fields are only reachable through accessors.

use serde::Serialize;
use std::fmt;

/// Whether a budget class tracks money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetClassType {
    Income,
    Expense,
}

impl BudgetClassType {
    /// Parse a class type, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Canonical string form, as written to class files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Short tag used in listings
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Income => "INC",
            Self::Expense => "EXP",
        }
    }
}

impl fmt::Display for BudgetClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BudgetClassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown budget class type '{}'", s))
    }
}

/// A single budgeting category
///
/// Serializes to the canonical class document: `name`, `type`,
/// `description` and `keywords`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetClass {
    name: String,

    #[serde(rename = "type")]
    class_type: BudgetClassType,

    description: String,

    /// Always lower-case; order and duplicates are preserved
    keywords: Vec<String>,
}

impl BudgetClass {
    /// Create a new budget class. Keywords are lower-cased.
    pub fn new<I, S>(
        name: impl Into<String>,
        class_type: BudgetClassType,
        description: impl Into<String>,
        keywords: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            class_type,
            description: description.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_type(&self) -> BudgetClassType {
        self.class_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Derive the file name this class is stored under
    ///
    /// The name is lower-cased and anything other than alphanumerics, `-`,
    /// `_` and `.` becomes `_`, so "Dining Out" maps to `dining_out.json`.
    /// Classes whose names differ only in those characters share a file.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}.json", stem)
    }

    /// Canonical JSON representation of this class
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "type": self.class_type.as_str(),
            "description": self.description,
            "keywords": self.keywords,
        })
    }

    /// Validate the class
    pub fn validate(&self) -> Result<(), ClassValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClassValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name,
            self.class_type.abbrev(),
            self.description
        )
    }
}

/// Validation errors for budget classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValidationError {
    EmptyName,
}

impl fmt::Display for ClassValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget class name cannot be empty"),
        }
    }
}

impl std::error::Error for ClassValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> BudgetClass {
        BudgetClass::new(
            "Groceries",
            BudgetClassType::Expense,
            "food",
            ["Store", "MARKET"],
        )
    }

    #[test]
    fn test_type_parse_case_insensitive() {
        assert_eq!(BudgetClassType::parse("Income"), Some(BudgetClassType::Income));
        assert_eq!(BudgetClassType::parse("EXPENSE"), Some(BudgetClassType::Expense));
        assert_eq!(BudgetClassType::parse("expense "), None);
        assert_eq!(BudgetClassType::parse("savings"), None);
        assert!("bogus".parse::<BudgetClassType>().is_err());
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let json = serde_json::to_string(&BudgetClassType::Income).unwrap();
        assert_eq!(json, "\"income\"");
        assert_eq!(BudgetClassType::Expense.to_string(), "expense");
    }

    #[test]
    fn test_new_lowercases_keywords() {
        let class = groceries();
        assert_eq!(class.name(), "Groceries");
        assert_eq!(class.class_type(), BudgetClassType::Expense);
        assert_eq!(class.description(), "food");
        assert_eq!(class.keywords(), &["store".to_string(), "market".to_string()]);
    }

    #[test]
    fn test_keywords_keep_duplicates_and_order() {
        let class = BudgetClass::new("Fun", BudgetClassType::Expense, "", ["b", "A", "a"]);
        assert_eq!(class.keywords(), &["b", "a", "a"]);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(groceries().file_name(), "groceries.json");

        let spaced = BudgetClass::new("Dining Out", BudgetClassType::Expense, "", Vec::<String>::new());
        assert_eq!(spaced.file_name(), "dining_out.json");

        let slashed = BudgetClass::new("Gas/Fuel", BudgetClassType::Expense, "", Vec::<String>::new());
        assert_eq!(slashed.file_name(), "gas_fuel.json");
    }

    #[test]
    fn test_same_name_same_file_name() {
        let a = groceries();
        let b = BudgetClass::new("Groceries", BudgetClassType::Income, "other", ["x"]);
        assert_eq!(a.file_name(), b.file_name());
    }

    #[test]
    fn test_to_json_matches_serialize() {
        let class = groceries();
        let expected = serde_json::json!({
            "name": "Groceries",
            "type": "expense",
            "description": "food",
            "keywords": ["store", "market"],
        });
        assert_eq!(class.to_json(), expected);
        assert_eq!(serde_json::to_value(&class).unwrap(), expected);
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&groceries()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Groceries","type":"expense","description":"food","keywords":["store","market"]}"#
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(groceries().to_string(), "Groceries (EXP): food");
    }

    #[test]
    fn test_validate() {
        assert!(groceries().validate().is_ok());

        let blank = BudgetClass::new("  ", BudgetClassType::Income, "", Vec::<String>::new());
        assert_eq!(blank.validate(), Err(ClassValidationError::EmptyName));
    }
}
