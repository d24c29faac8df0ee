//! Order Cart
//!
//! Ordered line items keyed by menu id. Lines keep first-added order; a
//! line whose quantity would drop to zero or below is removed.

use crate::domain::{MenuId, MenuItem};
use crate::money::Money;

/// One menu item in the cart and how many of it
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub menu_item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.menu_item.price.times(self.quantity)
    }
}

/// Invariants: no two lines share a menu id, every quantity is >= 1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit; repeats increment the existing line
    pub fn add_item(&mut self, menu_item: MenuItem) {
        match self.lines.iter_mut().find(|line| line.menu_item.id == menu_item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine { menu_item, quantity: 1 }),
        }
    }

    /// Apply `delta` to a line's quantity, removing it at zero or below.
    /// Unknown ids are ignored.
    pub fn change_quantity(&mut self, id: &MenuId, delta: i64) {
        let Some(index) = self.lines.iter().position(|line| &line.menu_item.id == id) else {
            return;
        };
        let next = i64::from(self.lines[index].quantity) + delta;
        if next <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    pub fn remove(&mut self, id: &MenuId) {
        self.lines.retain(|line| &line.menu_item.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Exact sum of price x quantity over all lines
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: &MenuId) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.menu_item.id == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn nasi_goreng() -> MenuItem {
        MenuItem::new("m-1", "Nasi Goreng", 20000)
    }

    fn es_teh() -> MenuItem {
        MenuItem::new("m-2", "Es Teh", 5000)
    }

    #[test]
    fn test_repeat_adds_increment_one_line() {
        let mut cart = Cart::new();
        let sequence = ["a", "b", "a", "c", "a", "b"];
        for id in sequence {
            cart.add_item(MenuItem::new(id, format!("Menu {}", id), 1000));
        }

        let mut expected: HashMap<&str, u32> = HashMap::new();
        for id in sequence {
            *expected.entry(id).or_default() += 1;
        }

        assert_eq!(cart.len(), 3);
        for line in cart.lines() {
            assert_eq!(line.quantity, expected[line.menu_item.id.as_str()]);
        }
        // Insertion order is first-added order
        let order: Vec<&str> = cart.lines().iter().map(|l| l.menu_item.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decrement_past_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(nasi_goreng());
        cart.add_item(nasi_goreng());
        cart.add_item(es_teh());

        cart.change_quantity(&nasi_goreng().id, -5);
        assert_eq!(cart.quantity_of(&nasi_goreng().id), 0);
        assert_eq!(cart.len(), 1);
        assert!(cart.lines().iter().all(|line| line.quantity > 0));

        cart.change_quantity(&es_teh().id, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_unknown_id() {
        let mut cart = Cart::new();
        cart.add_item(es_teh());
        cart.change_quantity(&es_teh().id, 1);
        cart.change_quantity(&MenuId::new("missing"), 1);
        assert_eq!(cart.quantity_of(&es_teh().id), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_is_exact() {
        let mut cart = Cart::new();
        let soto = MenuItem::new("s", "Soto", 15000);
        cart.add_item(soto.clone());
        cart.add_item(soto);
        cart.add_item(MenuItem::new("k", "Kopi", 8000));
        assert_eq!(cart.total(), Money::from(38000));
    }

    #[test]
    fn test_nasi_goreng_scenario() {
        let mut cart = Cart::new();
        cart.add_item(nasi_goreng());
        cart.add_item(nasi_goreng());
        cart.add_item(es_teh());
        assert_eq!(cart.total(), Money::from(45000));
        assert_eq!(cart.item_count(), 3);

        cart.change_quantity(&nasi_goreng().id, -1);
        assert_eq!(cart.total(), Money::from(25000));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add_item(es_teh());
        cart.change_quantity(&es_teh().id, i64::from(u32::MAX));
        assert_eq!(cart.quantity_of(&es_teh().id), u32::MAX);

        cart.add_item(es_teh());
        assert_eq!(cart.quantity_of(&es_teh().id), u32::MAX);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(es_teh());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }
}
