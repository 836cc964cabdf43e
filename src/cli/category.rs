use super::ui;
use crate::core::category::CategoryRegistry;
use anyhow::Result;
use comfy_table::Cell;

pub fn list(registry: &CategoryRegistry) -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Name"),
        ui::header_cell("Colors"),
    ]);

    for category in registry.list() {
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&category.name),
            Cell::new(format!("{} / {}", category.bg_color, category.text_color)),
        ]);
    }

    println!("{table}");
    Ok(())
}

pub fn add(
    registry: &CategoryRegistry,
    name: &str,
    icon_path: &str,
    bg_color: &str,
    text_color: &str,
) -> Result<()> {
    let descriptor = registry.add(name, icon_path, bg_color, text_color)?;
    println!(
        "Added category {} ({})",
        ui::style_text(&descriptor.name, ui::StyleType::TotalValue),
        descriptor.id
    );
    Ok(())
}
