//! Scripted cart actions.

use std::str::FromStr;

use anyhow::Result;
use lapki_commerce::cart::CartSnapshot;
use lapki_commerce::{ProductId, Storefront};

use super::CartArgs;
use crate::context::Context;

/// One cart action from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add(ProductId),
    Remove(ProductId),
    Update(ProductId, i64),
}

impl CartAction {
    /// Dispatch the action into the storefront.
    pub fn apply(self, store: &mut Storefront) {
        match self {
            CartAction::Add(id) => {
                store.add_to_cart(id);
            }
            CartAction::Remove(id) => {
                store.remove_from_cart(id);
            }
            CartAction::Update(id, delta) => {
                store.update_quantity(id, delta);
            }
        }
    }
}

impl FromStr for CartAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();

        match parts.as_slice() {
            ["add", raw] => Ok(CartAction::Add(parse_id(raw)?)),
            ["remove" | "rm", raw] => Ok(CartAction::Remove(parse_id(raw)?)),
            ["inc", raw] => Ok(CartAction::Update(parse_id(raw)?, 1)),
            ["dec", raw] => Ok(CartAction::Update(parse_id(raw)?, -1)),
            ["qty", raw, delta] => {
                let delta = delta
                    .parse::<i64>()
                    .map_err(|_| format!("invalid quantity delta '{}'", delta))?;
                Ok(CartAction::Update(parse_id(raw)?, delta))
            }
            _ => Err(format!(
                "unknown cart action '{}' (expected add:<id>, remove:<id>, inc:<id>, dec:<id> or qty:<id>:<delta>)",
                s
            )),
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, String> {
    raw.parse::<ProductId>()
        .map_err(|_| format!("invalid product id '{}'", raw))
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.open_store();

    for action in args.actions {
        ctx.output.debug(&format!("{:?}", action));
        action.apply(&mut session.store);
        session.flush(&ctx.output);
    }

    let snapshot = session.store.cart().snapshot();
    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }

    print_cart(ctx, &snapshot);
    Ok(())
}

pub(crate) fn print_cart(ctx: &Context, snapshot: &CartSnapshot) {
    ctx.output.header(&format!("Корзина ({})", snapshot.line_count));
    if snapshot.is_empty() {
        ctx.output.info("Корзина пуста");
        return;
    }

    let widths = [4, 22, 10, 5, 10];
    for line in &snapshot.lines {
        let id = line.product.id.to_string();
        let price = line.product.price.display();
        let quantity = format!("×{}", line.quantity);
        let subtotal = line.subtotal().display();
        ctx.output.table_row(
            &[&id, &line.product.name, &price, &quantity, &subtotal],
            &widths,
        );
    }
    ctx.output.kv("Итого", &snapshot.total.display());
}
