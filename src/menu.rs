/* ===============================================================================
QR menu ordering core.
Menu catalog reference data. 27 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// Catalog item id as issued by the remote catalog service
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl From<&str> for MenuItemId {
   fn from(s: &str) -> Self {
      Self(s.to_owned())
   }
}

// Single addon, the name is unique within its group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAddon {
   pub name: String,
   pub price: Money,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub group: Option<String>,
}

impl MenuAddon {
   pub fn new(name: &str, price: Money) -> Self {
      Self { name: name.to_owned(), price, group: None }
   }

   pub fn grouped(name: &str, price: Money, group: &str) -> Self {
      Self { name: name.to_owned(), price, group: Some(group.to_owned()) }
   }
}

// Group of addons with radio or checkbox semantics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonGroup {
   pub title: String,
   // false - at most one addon from the group, true - any subset
   pub multi_select: bool,
   pub items: Vec<MenuAddon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
   #[serde(rename = "_id")]
   pub id: MenuItemId,
   pub name: String,
   pub price: Money,
   #[serde(default)]
   pub addon_groups: Vec<AddonGroup>,
   #[serde(default = "active_by_default")]
   pub is_active: bool,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub is_veg: Option<bool>,
}

fn active_by_default() -> bool {
   true
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn catalog_item_from_service_json() {
      // Shape as returned by the remote catalog service
      let json = r#"{
         "_id": "65f1a2",
         "name": "Margherita Pizza",
         "price": 10.0,
         "addonGroups": [{
            "title": "Toppings",
            "multiSelect": true,
            "items": [{"name": "Extra Cheese", "price": 2.5, "group": "Toppings"}]
         }],
         "isVeg": true
      }"#;

      let item: MenuItem = serde_json::from_str(json).unwrap();
      assert_eq!(item.id, MenuItemId::from("65f1a2"));
      assert_eq!(item.price, Money::from_major(10));
      assert!(item.is_active); // absent in the payload, defaults to true
      assert_eq!(item.is_veg, Some(true));
      assert_eq!(item.addon_groups[0].items[0].price, Money::from_minor(250));
   }
}
