//! Interactive shopping session.

use anyhow::Result;
use dialoguer::{Input, Select};
use lapki_commerce::navigation::PageSection;
use lapki_commerce::{Money, StoreFeatures, Storefront};

use super::cart::print_cart;
use super::catalog::print_products;
use super::contacts::print_contacts;
use super::ShopArgs;
use crate::context::{Context, Session};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    AddProduct,
    Increase,
    Decrease,
    Remove,
    EstimateDelivery,
    OpenImage,
    NextImage,
    PreviousImage,
    CloseImage,
    GoTo,
    Summary,
    Quit,
}

impl MenuItem {
    fn label(&self) -> &'static str {
        match self {
            MenuItem::AddProduct => "В корзину",
            MenuItem::Increase => "Увеличить количество",
            MenuItem::Decrease => "Уменьшить количество",
            MenuItem::Remove => "Удалить из корзины",
            MenuItem::EstimateDelivery => "Рассчитать доставку",
            MenuItem::OpenImage => "Открыть фото",
            MenuItem::NextImage => "Следующее фото",
            MenuItem::PreviousImage => "Предыдущее фото",
            MenuItem::CloseImage => "Закрыть фото",
            MenuItem::GoTo => "Перейти к разделу",
            MenuItem::Summary => "Итог заказа",
            MenuItem::Quit => "Выход",
        }
    }
}

/// Menu entries that make sense for the current page state.
fn menu(store: &Storefront) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::AddProduct];

    if !store.cart().is_empty() {
        items.extend([MenuItem::Increase, MenuItem::Decrease, MenuItem::Remove]);
    }

    if store.features().delivery_estimator {
        items.push(MenuItem::EstimateDelivery);
    }

    match store.lightbox() {
        Some(lightbox) if lightbox.navigator().is_open() => items.extend([
            MenuItem::NextImage,
            MenuItem::PreviousImage,
            MenuItem::CloseImage,
        ]),
        Some(_) => items.push(MenuItem::OpenImage),
        None => {}
    }

    items.extend([MenuItem::GoTo, MenuItem::Summary, MenuItem::Quit]);
    items
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let features = if args.basic {
        StoreFeatures::basic()
    } else {
        ctx.config.store_features()
    };
    let mut session = ctx.open_store_with(features);

    ctx.output.header("ЛапкиЛакомки");
    ctx.output.info("Натуральные лакомства для ваших питомцев");

    loop {
        let items = menu(&session.store);
        let labels: Vec<&str> = items.iter().map(MenuItem::label).collect();
        let choice = Select::new()
            .with_prompt(session.store.active_section().label())
            .items(&labels)
            .default(0)
            .interact()?;

        let item = items[choice];
        if item == MenuItem::Quit {
            break;
        }

        handle(item, &mut session, ctx)?;
        session.flush(&ctx.output);
    }

    show_summary(&session, ctx);
    Ok(())
}

fn handle(item: MenuItem, session: &mut Session, ctx: &Context) -> Result<()> {
    let store = &mut session.store;

    match item {
        MenuItem::AddProduct => {
            store.scroll_to(PageSection::Catalog);
            let products: Vec<_> = store.catalog().products().iter().collect();
            print_products(ctx, &products);
            let labels: Vec<String> = products
                .iter()
                .map(|p| format!("{} {} ({})", p.glyph, p.name, p.price))
                .collect();
            let index = Select::new()
                .with_prompt("Товар")
                .items(&labels)
                .default(0)
                .interact()?;
            let id = products[index].id;
            store.add_to_cart(id);
        }
        MenuItem::Increase | MenuItem::Decrease | MenuItem::Remove => {
            let lines = store.cart().lines();
            let labels: Vec<String> = lines
                .iter()
                .map(|l| format!("{} ×{}", l.product.name, l.quantity))
                .collect();
            let index = Select::new()
                .with_prompt("Позиция")
                .items(&labels)
                .default(0)
                .interact()?;
            let id = lines[index].product.id;
            match item {
                MenuItem::Increase => store.update_quantity(id, 1),
                MenuItem::Decrease => store.update_quantity(id, -1),
                _ => store.remove_from_cart(id),
            };
            print_cart(ctx, &store.cart().snapshot());
        }
        MenuItem::EstimateDelivery => {
            store.scroll_to(PageSection::Delivery);
            let city: String = Input::new()
                .with_prompt("Город")
                .allow_empty(true)
                .interact_text()?;
            // Blank input is reported through the notification log.
            let _ = store.estimate_delivery(&city);
        }
        MenuItem::OpenImage => {
            store.scroll_to(PageSection::Gallery);
            let labels: Vec<&str> = store
                .gallery_images()
                .iter()
                .map(|i| i.alt.as_str())
                .collect();
            let index = Select::new()
                .with_prompt("Фото")
                .items(&labels)
                .default(0)
                .interact()?;
            store.open_image(index)?;
            show_image(store, ctx);
        }
        MenuItem::NextImage => {
            store.next_image()?;
            show_image(store, ctx);
        }
        MenuItem::PreviousImage => {
            store.previous_image()?;
            show_image(store, ctx);
        }
        MenuItem::CloseImage => {
            store.close_image()?;
        }
        MenuItem::GoTo => {
            let labels: Vec<&str> = PageSection::ALL.iter().map(PageSection::label).collect();
            let index = Select::new()
                .with_prompt("Раздел")
                .items(&labels)
                .default(0)
                .interact()?;
            let section = PageSection::ALL[index];
            let anchor = store.scroll_to(section);
            ctx.output.debug(&format!("#{}", anchor));
            if section == PageSection::Contacts {
                print_contacts(ctx, store.contacts());
            }
        }
        MenuItem::Summary => show_summary(session, ctx),
        MenuItem::Quit => {}
    }

    Ok(())
}

fn show_image(store: &Storefront, ctx: &Context) {
    let Some(lightbox) = store.lightbox() else {
        return;
    };
    if let (Some(image), Some(label)) = (lightbox.current_image(), lightbox.position_label()) {
        ctx.output.kv(&label, &image.alt);
        ctx.output.kv("url", &image.url);
    }
}

fn show_summary(session: &Session, ctx: &Context) {
    let snapshot = session.store.snapshot();
    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return;
    }

    print_cart(ctx, &snapshot.cart);

    let summary = &snapshot.summary;
    if let Some(quote) = &snapshot.delivery_quote {
        let price = if summary.free_delivery {
            "бесплатно".to_string()
        } else {
            quote.price.display()
        };
        ctx.output.kv(&format!("Доставка ({})", quote.city), &price);
    }

    let remaining = summary.remaining_for_free_delivery();
    if summary.free_delivery_available && remaining > Money::zero() {
        ctx.output
            .info(&format!("До бесплатной доставки по Москве: {}", remaining.display()));
    }
    ctx.output.kv("К оплате", &summary.grand_total.display());
}
