//! Delivery estimate command.

use anyhow::Result;
use lapki_commerce::delivery::{DeliveryMethod, DeliveryQuote};
use lapki_commerce::Money;
use serde::Serialize;

use super::DeliveryArgs;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct MethodRow {
    method: DeliveryMethod,
    name: &'static str,
    base_price: Money,
    price: String,
    estimate: String,
    description: &'static str,
}

impl MethodRow {
    fn new(method: DeliveryMethod) -> Self {
        Self {
            method,
            name: method.display_name(),
            base_price: method.base_price(),
            price: method.price_label(),
            estimate: method.delivery_estimate(),
            description: method.description(),
        }
    }
}

/// Everything the command printed, as one JSON document.
#[derive(Debug, Default, Serialize)]
struct DeliveryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    methods: Option<Vec<MethodRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<DeliveryQuote>,
}

/// Run the delivery command.
pub fn run(args: DeliveryArgs, ctx: &Context) -> Result<()> {
    let mut report = DeliveryReport::default();

    if args.methods {
        let rows: Vec<MethodRow> = DeliveryMethod::ALL.into_iter().map(MethodRow::new).collect();
        print_methods(ctx, &rows);
        report.methods = Some(rows);
    }

    if let Some(city) = args.city {
        let mut session = ctx.open_store();
        let result = session.store.estimate_delivery(&city);
        session.flush(&ctx.output);
        report.quote = Some(result?);
    }

    if ctx.output.is_json() {
        ctx.output.json(&report);
    }
    Ok(())
}

fn print_methods(ctx: &Context, rows: &[MethodRow]) {
    ctx.output.header("Доставка");
    for row in rows {
        ctx.output
            .list_item(&format!("{} ({}), {}", row.name, row.estimate, row.price));
        ctx.output.kv("    ", row.description);
    }
}
