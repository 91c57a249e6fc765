/* ===============================================================================
QR menu ordering core.
Cart engine. 28 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use derive_more::{Display, From};

use crate::menu::{MenuAddon, MenuItem, MenuItemId};
use crate::money::Money;
use crate::order::PersistedLine;

// Fallback name for persisted lines whose catalog reference carries no name
pub const UNKNOWN_ITEM: &str = "Unknown Item";

// ============================================================================
// [Line items]
// ============================================================================

// Cart-local line id, unique for the lifetime of one cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Display)]
pub struct LineId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
   pub id: LineId,
   pub menu_item_id: MenuItemId,
   pub name: String,
   // Snapshot of the catalog price at add time
   pub unit_price: Money,
   pub quantity: u32, // at least 1 while the line exists
   pub addons: Vec<MenuAddon>,
   pub is_veg: Option<bool>,
}

impl CartLineItem {
   pub fn line_total(&self) -> Money {
      let addons: Money = self.addons.iter().map(|a| a.price).sum();
      (self.unit_price + addons) * self.quantity
   }

   // Lines with the same item and the same addon multiset are one line
   fn addon_key(&self) -> Vec<&str> {
      sorted_names(&self.addons)
   }
}

fn sorted_names(addons: &[MenuAddon]) -> Vec<&str> {
   let mut names: Vec<&str> = addons.iter().map(|a| a.name.as_str()).collect();
   names.sort_unstable();
   names
}

// ============================================================================
// [Cart]
// ============================================================================

// Summary for the cart announcement line
pub struct CartInfo {
   pub lines_num: usize,
   pub items_num: u32,
   pub total_cost: Money,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
   lines: Vec<CartLineItem>,
   next_id: u64,
}

impl Cart {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn lines(&self) -> &[CartLineItem] {
      &self.lines
   }

   pub fn get(&self, id: LineId) -> Option<&CartLineItem> {
      self.lines.iter().find(|l| l.id == id)
   }

   pub fn len(&self) -> usize {
      self.lines.len()
   }

   pub fn is_empty(&self) -> bool {
      self.lines.is_empty()
   }

   pub fn clear(&mut self) {
      self.lines.clear();
   }

   // Add one unit of the item with the chosen addons. Merges into an
   // existing line when the item and the addon set match, otherwise appends
   // a new line with the price snapshotted from the catalog.
   pub fn add_to_cart(&mut self, item: &MenuItem, chosen: &[MenuAddon]) -> LineId {
      let key = sorted_names(chosen);
      if let Some(line) = self.lines.iter_mut()
         .find(|l| l.menu_item_id == item.id && l.addon_key() == key)
      {
         line.quantity += 1;
         log::debug!("cart: merged '{}' into line {}", item.name, line.id);
         return line.id;
      }

      let id = self.alloc_id();
      self.lines.push(CartLineItem {
         id,
         menu_item_id: item.id.clone(),
         name: item.name.clone(),
         unit_price: item.price,
         quantity: 1,
         addons: chosen.to_vec(),
         is_veg: item.is_veg,
      });
      id
   }

   // Change the quantity by any delta. Reaching zero removes the line,
   // an unknown id is a silent no-op.
   pub fn update_quantity(&mut self, id: LineId, delta: i64) {
      let pos = match self.lines.iter().position(|l| l.id == id) {
         Some(pos) => pos,
         None => return,
      };

      let new_quantity = (self.lines[pos].quantity as i64 + delta).max(0);
      if new_quantity == 0 {
         self.lines.remove(pos);
      } else {
         self.lines[pos].quantity = new_quantity as u32;
      }
   }

   pub fn remove_from_cart(&mut self, id: LineId) {
      self.lines.retain(|l| l.id != id);
   }

   pub fn cart_total(&self) -> Money {
      self.lines.iter().map(CartLineItem::line_total).sum()
   }

   pub fn cart_info(&self) -> CartInfo {
      self.lines.iter().fold(
         CartInfo { lines_num: 0, items_num: 0, total_cost: Money::zero() },
         |acc, l| CartInfo {
            lines_num: acc.lines_num + 1,
            items_num: acc.items_num + l.quantity,
            total_cost: acc.total_cost + l.line_total(),
         },
      )
   }

   // Seed the cart from an order already open on the table. Replaces the
   // whole cart, one fresh line per persisted line, no merging with any
   // previous client-side contents.
   pub fn reconcile_from_existing_order(&mut self, persisted: &[PersistedLine]) {
      self.lines.clear();
      for line in persisted {
         // The server never stores a zero-quantity line
         if line.quantity == 0 {
            continue;
         }

         let name = match line.display_name() {
            Some(name) => name.to_owned(),
            None => {
               log::warn!("cart: persisted line {} has no name, using fallback", line.item.id());
               UNKNOWN_ITEM.to_owned()
            }
         };

         let id = self.alloc_id();
         self.lines.push(CartLineItem {
            id,
            menu_item_id: line.item.id().clone(),
            name,
            unit_price: line.price,
            quantity: line.quantity,
            addons: line.addons.clone(),
            is_veg: line.item.is_veg(),
         });
      }
   }

   fn alloc_id(&mut self) -> LineId {
      self.next_id += 1;
      LineId::from(self.next_id)
   }
}
