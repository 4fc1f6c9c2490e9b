//! The static product table.

use crate::catalog::{Category, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;

/// Ordered, read-only product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shop's treat assortment.
    pub fn builtin() -> Self {
        let row = |id: u32, name: &str, price: i64, description: &str, category: &str, glyph: &str| {
            Product::new(
                ProductId::new(id),
                name,
                Money::new(price),
                description,
                category,
                glyph,
            )
        };

        Self::new(vec![
            row(
                1,
                "Косточка из оленины",
                450,
                "100% натуральная оленина, идеальна для крупных пород",
                "Мясные лакомства",
                "🦴",
            ),
            row(
                2,
                "Куриные чипсы",
                320,
                "Хрустящие чипсы из куриной грудки, богатые белком",
                "Сушеные лакомства",
                "🍗",
            ),
            row(
                3,
                "Дентал стикс",
                280,
                "Для здоровья зубов и свежести дыхания",
                "Уход за зубами",
                "🦷",
            ),
            row(
                4,
                "Вяленая говядина",
                520,
                "Премиум говядина долгой вялки",
                "Мясные лакомства",
                "🥩",
            ),
            row(
                5,
                "Утиные твистеры",
                380,
                "Закрученные полоски из утиного мяса",
                "Сушеные лакомства",
                "🦆",
            ),
            row(
                6,
                "Лакомство с лососем",
                490,
                "Омега-3 для блестящей шерсти",
                "Рыбные лакомства",
                "🐟",
            ),
        ])
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it is not in the catalog.
    pub fn require(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.get(id).ok_or(StoreError::ProductNotFound(id))
    }

    /// Products filed under a category, in display order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.in_category(category))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for product in &self.products {
            match categories.iter_mut().find(|c| c.name == product.category) {
                Some(category) => category.product_count += 1,
                None => {
                    let mut category = Category::new(product.category.clone());
                    category.product_count = 1;
                    categories.push(category);
                }
            }
        }
        categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);

        let bone = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(bone.name, "Косточка из оленины");
        assert_eq!(bone.price, Money::new(450));

        let chips = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(chips.price, Money::new(320));
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_prices_are_positive() {
        assert!(Catalog::builtin()
            .products()
            .iter()
            .all(|p| p.price.is_positive()));
    }

    #[test]
    fn test_require_unknown_product() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.require(ProductId::new(99)),
            Err(StoreError::ProductNotFound(ProductId::new(99)))
        );
        assert!(catalog.require(ProductId::new(6)).is_ok());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::builtin();
        let meat: Vec<_> = catalog
            .by_category("Мясные лакомства")
            .map(|p| p.id.get())
            .collect();
        assert_eq!(meat, vec![1, 4]);
        assert_eq!(catalog.by_category("Игрушки").count(), 0);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let categories = Catalog::builtin().categories();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Мясные лакомства",
                "Сушеные лакомства",
                "Уход за зубами",
                "Рыбные лакомства"
            ]
        );
        assert_eq!(categories[0].product_count, 2);
        assert_eq!(categories[2].product_count, 1);
    }
}
