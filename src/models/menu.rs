use serde::Serialize;

/// A dish on the menu. Prices are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub price: u64,
}

impl MenuItem {
    pub fn new(id: &str, name: &str, price: u64, desc: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            desc: desc.to_string(),
            price,
        }
    }
}

/// Static catalog, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The built-in home-food menu.
    pub fn sample() -> Self {
        Self::new(vec![
            MenuItem::new(
                "m1",
                "Hyderabadi Biryani (Chicken)",
                220,
                "Fragrant basmati, spices, tender chicken",
            ),
            MenuItem::new(
                "m2",
                "Paneer Butter Masala",
                160,
                "Creamy tomato curry with paneer cubes",
            ),
            MenuItem::new(
                "m3",
                "Street-style Dosa",
                90,
                "Crispy dosa with coconut chutney",
            ),
            MenuItem::new("m4", "Gulab Jamun (2pc)", 60, "Warm syrupy dessert"),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|it| it.id == id)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::sample()
    }
}
