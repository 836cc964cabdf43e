use super::ui;
use crate::store::expenses::ExpenseStore;
use anyhow::Result;

pub async fn run(expenses: &ExpenseStore, id: &str) -> Result<()> {
    if expenses.delete(id).await? {
        println!("Removed expense {id}");
    } else {
        println!(
            "{}",
            ui::style_text(&format!("No expense with id {id}"), ui::StyleType::Error)
        );
    }
    Ok(())
}
