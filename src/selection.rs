/* ===============================================================================
QR menu ordering core.
Addon selection rules. 05 Mar 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::menu::{AddonGroup, MenuAddon, MenuItem};
use crate::money::Money;

// Next selection of one group after the user tapped an addon.
// Multi-select groups toggle membership, appending on add. Single-select
// groups hold at most one addon, tapping the chosen one deselects it.
pub fn toggle_addon(group: &AddonGroup, addon: &MenuAddon, current: &[MenuAddon]) -> Vec<MenuAddon> {
   if group.multi_select {
      let mut next = current.to_vec();
      match next.iter().position(|a| a.name == addon.name) {
         Some(pos) => { next.remove(pos); }
         None => next.push(addon.clone()),
      }
      next
   } else if current.len() == 1 && current[0].name == addon.name {
      Vec::new()
   } else {
      vec![addon.clone()]
   }
}

pub fn price_with_addons(base: Money, addons: &[MenuAddon]) -> Money {
   base + addons.iter().map(|a| a.price).sum()
}

// Per-group selections for one menu item, kept independent until the item
// goes to the cart
#[derive(Debug, Clone, Default)]
pub struct AddonSelection {
   groups: Vec<Vec<MenuAddon>>,
}

impl AddonSelection {
   pub fn for_item(item: &MenuItem) -> Self {
      Self { groups: vec![Vec::new(); item.addon_groups.len()] }
   }

   pub fn toggle(&mut self, group_index: usize, group: &AddonGroup, addon: &MenuAddon) {
      if group_index >= self.groups.len() {
         self.groups.resize(group_index + 1, Vec::new());
      }
      self.groups[group_index] = toggle_addon(group, addon, &self.groups[group_index]);
   }

   pub fn group(&self, group_index: usize) -> &[MenuAddon] {
      self.groups.get(group_index).map(|g| g.as_slice()).unwrap_or(&[])
   }

   // One flat list in group order for add_to_cart
   pub fn flatten(&self) -> Vec<MenuAddon> {
      self.groups.iter().flatten().cloned().collect()
   }

   pub fn is_empty(&self) -> bool {
      self.groups.iter().all(Vec::is_empty)
   }

   pub fn clear(&mut self) {
      self.groups.iter_mut().for_each(Vec::clear);
   }
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;

   fn toppings() -> AddonGroup {
      AddonGroup {
         title: String::from("Toppings"),
         multi_select: true,
         items: vec![
            MenuAddon::grouped("Extra Cheese", Money::from_minor(250), "Toppings"),
            MenuAddon::grouped("Olives", Money::from_minor(150), "Toppings"),
         ],
      }
   }

   fn size() -> AddonGroup {
      AddonGroup {
         title: String::from("Size"),
         multi_select: false,
         items: vec![
            MenuAddon::grouped("Medium", Money::zero(), "Size"),
            MenuAddon::grouped("Large", Money::from_major(3), "Size"),
         ],
      }
   }

   #[test]
   fn multi_select_accumulates() {
      let group = toppings();
      let a = &group.items[0];
      let b = &group.items[1];

      let sel = toggle_addon(&group, a, &[]);
      let sel = toggle_addon(&group, b, &sel);
      assert_eq!(sel.len(), 2);
      assert_eq!(sel[0].name, "Extra Cheese");
      assert_eq!(sel[1].name, "Olives"); // appended at the end

      // Toggling A again removes only A
      let sel = toggle_addon(&group, a, &sel);
      assert_eq!(sel.len(), 1);
      assert_eq!(sel[0].name, "Olives");
   }

   #[test]
   fn single_select_is_exclusive() {
      let group = size();
      let medium = &group.items[0];
      let large = &group.items[1];

      let sel = toggle_addon(&group, medium, &[]);
      let sel = toggle_addon(&group, large, &sel);
      assert_eq!(sel.len(), 1);
      assert_eq!(sel[0].name, "Large");

      // Tapping the sole chosen addon deselects the group
      let sel = toggle_addon(&group, large, &sel);
      assert!(sel.is_empty());
   }

   #[test]
   fn groups_stay_independent() {
      let toppings = toppings();
      let size = size();

      let mut sel = AddonSelection::default();
      sel.toggle(0, &toppings, &toppings.items[0]);
      sel.toggle(1, &size, &size.items[1]);
      sel.toggle(0, &toppings, &toppings.items[1]);

      assert_eq!(sel.group(0).len(), 2);
      assert_eq!(sel.group(1).len(), 1);

      let flat = sel.flatten();
      let names: Vec<&str> = flat.iter().map(|a| a.name.as_str()).collect();
      assert_eq!(names, ["Extra Cheese", "Olives", "Large"]);

      sel.clear();
      assert!(sel.is_empty());
   }

   #[test]
   fn price_sums_base_and_addons() {
      let addons = [
         MenuAddon::new("Extra Cheese", Money::from_minor(250)),
         MenuAddon::new("Olives", Money::from_minor(150)),
      ];
      assert_eq!(price_with_addons(Money::from_major(10), &addons), Money::from_minor(1400));
      assert_eq!(price_with_addons(Money::from_major(10), &[]), Money::from_major(10));
   }
}
