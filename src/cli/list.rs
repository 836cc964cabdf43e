use super::ui;
use crate::core::analytics::{self, Period};
use crate::core::category::{CategoryDescriptor, CategoryRegistry};
use crate::core::relative_date;
use crate::store::expenses::ExpenseStore;
use anyhow::Result;
use comfy_table::Cell;

pub fn run(
    expenses: &ExpenseStore,
    registry: &CategoryRegistry,
    period: Period,
    page: usize,
    per_page: usize,
) -> Result<()> {
    let records = analytics::filter_by_period(&expenses.list(), period);
    let total = analytics::total_in_reporting_currency(&records);
    let pages = analytics::page_count(records.len(), per_page);
    let page_records = analytics::paginate(&records, page, per_page);

    if records.is_empty() {
        println!(
            "No expenses recorded for period '{}'.",
            ui::style_text(period.as_str(), ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Category"),
        ui::header_cell("Amount"),
        ui::header_cell("Value (USD)"),
    ]);

    for record in &page_records {
        let category = registry
            .get(&record.category_id)
            .unwrap_or_else(CategoryDescriptor::unknown);
        let value = record
            .conversion
            .as_ref()
            .map_or(record.amount, |conversion| conversion.usd_amount);

        table.add_row(vec![
            Cell::new(relative_date::format(&record.date)),
            Cell::new(&category.name),
            ui::amount_cell(ui::format_currency(record.amount, &record.currency)),
            ui::amount_cell(format!("{value:.2}")),
        ]);
    }

    println!("{table}");
    println!(
        "\nTotal ({}): {}   {}",
        ui::style_text(period.as_str(), ui::StyleType::TotalLabel),
        ui::style_text(&format!("{total:.2}"), ui::StyleType::TotalValue),
        ui::style_text(
            &format!("page {page} of {pages}, {} expenses", records.len()),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}
