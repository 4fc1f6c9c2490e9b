//! Catalog listing.

use anyhow::{bail, Result};
use lapki_commerce::catalog::Product;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let session = ctx.open_store();
    let catalog = session.store.catalog();

    if args.categories {
        let categories = catalog.categories();
        if ctx.output.is_json() {
            ctx.output.json(&categories);
            return Ok(());
        }
        ctx.output.header("Категории");
        for category in &categories {
            ctx.output
                .list_item(&format!("{} ({})", category.name, category.product_count));
        }
        return Ok(());
    }

    let products: Vec<&Product> = match &args.category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.products().iter().collect(),
    };

    if products.is_empty() {
        if let Some(category) = args.category {
            bail!("No products in category: {}", category);
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Популярные лакомства");
    print_products(ctx, &products);
    Ok(())
}

pub(crate) fn print_products(ctx: &Context, products: &[&Product]) {
    let widths = [4, 3, 22, 10, 18];
    ctx.output
        .table_row(&["ID", "", "Название", "Цена", "Категория"], &widths);
    for product in products {
        let id = product.id.to_string();
        let price = product.price.display();
        ctx.output.table_row(
            &[&id, &product.glyph, &product.name, &price, &product.category],
            &widths,
        );
    }
}
