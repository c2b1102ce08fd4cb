//! Static menu catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dish or drink on the menu. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<&str>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.map(str::to_string),
            price,
            category: category.into(),
        }
    }
}

/// The catalog, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// The house menu served by the demo.
    pub fn house() -> Self {
        let item = |id: &str, name: &str, description: &str, cents: i64, category: &str| {
            MenuItem::new(id, name, Some(description), Decimal::new(cents, 2), category)
        };
        Self::new(vec![
            item("1", "Hamburguesa Clásica", "Con lechuga, tomate y salsa especial", 899, "Burgers"),
            item("2", "Hamburguesa Premium", "Doble carne, queso y bacon", 1299, "Burgers"),
            item("3", "Hot Dog", "Con cebolla caramelizada", 699, "Hot Dogs"),
            item("4", "Papas Fritas", "Crujientes y doradas", 399, "Sides"),
            item("5", "Ensalada César", "Con pollo grillé y pan tostado", 999, "Salads"),
            item("6", "Refresco (33cl)", "Variedad de sabores", 299, "Drinks"),
            item("7", "Café", "Espresso o americano", 349, "Drinks"),
            item("8", "Postre Especial", "Brownie con helado", 599, "Desserts"),
        ])
    }
}
