use super::menu::MenuItem;
use serde::Serialize;

/// One cart row: a snapshot of the menu item plus the chosen quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub qty: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.qty) * self.price
    }
}

/// Cart keyed by menu item id, iterated in first-insertion order.
///
/// A line never holds a zero quantity: lowering it to zero removes the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`, creating the line at quantity 1 if absent.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => {
                line.qty = line.qty.saturating_add(1);
                line.name = item.name.clone();
                line.price = item.price;
            }
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                qty: 1,
            }),
        }
    }

    /// Set the quantity of an existing line. Non-positive values remove it.
    ///
    /// Returns `false` when a positive quantity targets an id that is not in
    /// the cart; there is no snapshot to build a line from.
    pub fn update_qty(&mut self, id: &str, qty: i64) -> bool {
        if qty <= 0 {
            self.lines.retain(|l| l.id != id);
            return true;
        }

        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.qty = u32::try_from(qty).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    /// Remove one unit, dropping the line when it reaches zero.
    pub fn decrement(&mut self, id: &str) {
        let next = i64::from(self.qty(id)) - 1;
        self.update_qty(id, next.max(0));
    }

    pub fn qty(&self, id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.qty)
            .unwrap_or(0)
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.qty)).sum()
    }
}
