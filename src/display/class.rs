//! Budget class display formatting

use crate::config::Config;
use crate::models::BudgetClass;
use crate::storage::SyncReport;

/// One-paragraph summary of a parsed configuration
pub fn format_config_summary(config: &Config) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", config.name()));
    output.push_str(&format!(
        "  Save location: {}\n",
        config.save_location().display()
    ));
    output.push_str(&format!("  Classes:       {}\n", config.classes().len()));

    output
}

/// Format budget classes as an aligned table
pub fn format_class_table(classes: &[BudgetClass]) -> String {
    if classes.is_empty() {
        return "No budget classes found.".to_string();
    }

    let name_width = classes
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let file_width = classes
        .iter()
        .map(|c| c.file_name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<4}  {:<file_width$}  {}\n",
        "Name",
        "Type",
        "File",
        "Keywords",
        name_width = name_width,
        file_width = file_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<4}  {:-<file_width$}  {:-<8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        file_width = file_width,
    ));

    for class in classes {
        let keywords = if class.keywords().is_empty() {
            "-".to_string()
        } else {
            class.keywords().join(", ")
        };

        output.push_str(&format!(
            "{:<name_width$}  {:<4}  {:<file_width$}  {}\n",
            class.name(),
            class.class_type().abbrev(),
            class.file_name(),
            keywords,
            name_width = name_width,
            file_width = file_width,
        ));
    }

    output
}

/// Format the outcome of syncing classes to disk
pub fn format_sync_report(report: &SyncReport) -> String {
    let mut output = String::new();

    for name in &report.created {
        output.push_str(&format!("  created  {}\n", name));
    }
    for name in &report.existing {
        output.push_str(&format!("  exists   {}\n", name));
    }

    output.push_str(&format!(
        "{} created, {} already present\n",
        report.created.len(),
        report.existing.len()
    ));

    output
}
