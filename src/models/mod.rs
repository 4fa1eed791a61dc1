//! Core data models for sbudget

pub mod budget_class;

pub use budget_class::{BudgetClass, BudgetClassType, ClassValidationError};
