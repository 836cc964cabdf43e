use super::ui;
use crate::core::category::CategoryRegistry;
use crate::core::expense::ExpenseDraft;
use crate::store::expenses::ExpenseStore;
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};

pub async fn run(
    expenses: &ExpenseStore,
    registry: &CategoryRegistry,
    category: &str,
    amount: f64,
    currency: &str,
    date: Option<&str>,
    receipt: Option<String>,
) -> Result<()> {
    if amount <= 0.0 {
        bail!("Amount must be positive, got {amount}");
    }

    let date = match date {
        Some(date) => {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                bail!("Invalid date '{date}', expected YYYY-MM-DD");
            }
            date.to_string()
        }
        None => Local::now().format("%Y-%m-%d").to_string(),
    };

    // The category must exist before an expense references it
    if registry.get(category).is_none() {
        bail!(
            "Unknown category '{category}'. Run 'spendlog category list' to see \
             available categories, or add one with 'spendlog category add'."
        );
    }

    let draft = ExpenseDraft {
        category_id: category.to_string(),
        amount,
        currency: currency.to_string(),
        date,
        receipt,
    };

    let pb = ui::new_spinner("Converting currency...");
    let result = expenses.add(draft).await;
    pb.finish_and_clear();
    let record = result?;

    let original = ui::format_currency(record.amount, &record.currency);
    match record.conversion.as_ref() {
        Some(conversion) if conversion.exchange_rate != 1.0 => {
            println!(
                "Recorded {} ({}) for {} on {}",
                ui::style_text(&original, ui::StyleType::TotalValue),
                ui::format_currency(conversion.usd_amount, "USD"),
                record.category_id,
                record.date
            );
        }
        _ => {
            println!(
                "Recorded {} for {} on {}",
                ui::style_text(&original, ui::StyleType::TotalValue),
                record.category_id,
                record.date
            );
        }
    }

    Ok(())
}
