use crate::category::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};
use crate::item::Item;

/// The shop's opening inventory, one or more of each kind of goods.
pub fn standard_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
