use super::ui;
use crate::core::analytics::{self, DashboardSummary, Period};
use crate::core::config::AppConfig;
use crate::store::expenses::ExpenseStore;
use anyhow::Result;

pub fn run(expenses: &ExpenseStore, config: &AppConfig, period: Period) -> Result<()> {
    let records = analytics::filter_by_period(&expenses.list(), period);
    let summary = DashboardSummary::compute(&records, config.income);

    println!(
        "{}",
        ui::style_text(&format!("Dashboard ({})", period.as_str()), ui::StyleType::Title)
    );
    ui::print_separator();
    println!(
        "Total Balance ({}): {}",
        ui::style_text(&config.currency, ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", summary.balance), ui::StyleType::TotalValue)
    );
    println!("Income:   {:.2}", summary.income);
    println!("Expenses: {:.2}", summary.expenses);
    println!(
        "{}",
        ui::style_text(
            &format!("{} expenses recorded", records.len()),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}
