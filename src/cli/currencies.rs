use super::ui;
use crate::core::{Catalog, CatalogSource};
use anyhow::Result;
use comfy_table::Cell;

pub fn display_as_table(catalog: &Catalog) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Currency")]);
    for (code, label) in catalog.entries() {
        table.add_row(vec![Cell::new(code), Cell::new(label)]);
    }
    table.to_string()
}

pub fn run(catalog: &Catalog, source: &CatalogSource) -> Result<()> {
    println!(
        "Currencies: {}\n",
        ui::style_text(&format!("{} from {source}", catalog.len()), ui::StyleType::Title)
    );
    println!("{}", display_as_table(catalog));
    Ok(())
}
