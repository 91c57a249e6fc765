/* ===============================================================================
QR menu ordering core.
Order exchange with the remote order service. 11 Mar 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::menu::{MenuAddon, MenuItemId};
use crate::money::Money;

// ============================================================================
// [Persisted order, inbound]
// ============================================================================

// The order service returns the item reference either as a bare id string
// or as a populated object, depending on the endpoint. One union with
// normalizing accessors instead of shape checks at every call site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
   Id(MenuItemId),
   Populated(PopulatedItem),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedItem {
   #[serde(rename = "_id")]
   pub id: MenuItemId,
   #[serde(default)]
   pub name: Option<String>,
   #[serde(default)]
   pub is_veg: Option<bool>,
}

impl ItemRef {
   pub fn from_populated(id: &str, name: Option<&str>, is_veg: Option<bool>) -> Self {
      Self::Populated(PopulatedItem {
         id: MenuItemId::from(id),
         name: name.map(str::to_owned),
         is_veg,
      })
   }

   pub fn id(&self) -> &MenuItemId {
      match self {
         Self::Id(id) => id,
         Self::Populated(item) => &item.id,
      }
   }

   pub fn name(&self) -> Option<&str> {
      match self {
         Self::Id(_) => None,
         Self::Populated(item) => item.name.as_deref(),
      }
   }

   pub fn is_veg(&self) -> Option<bool> {
      match self {
         Self::Id(_) => None,
         Self::Populated(item) => item.is_veg,
      }
   }
}

// One line of an order already stored on the server, the seed for
// Cart::reconcile_from_existing_order
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLine {
   pub item: ItemRef,
   // Some endpoints denormalize the name onto the line itself
   #[serde(default)]
   pub name: Option<String>,
   pub quantity: u32,
   pub price: Money,
   #[serde(default)]
   pub addons: Vec<MenuAddon>,
}

impl PersistedLine {
   pub fn display_name(&self) -> Option<&str> {
      self.name.as_deref().or_else(|| self.item.name())
   }
}

// ============================================================================
// [Session context and outbound payload]
// ============================================================================

// Everything one order-building session needs from the surrounding
// application, passed explicitly instead of read from ambient storage
#[derive(Debug, Clone, Default)]
pub struct OrderSession {
   pub restaurant_id: String,
   pub table_id: String,
   // For the transport layer only, never serialized into a payload
   pub auth_token: Option<String>,
   pub customer_name: Option<String>,
   pub instructions: Option<String>,
}

impl OrderSession {
   pub fn new(restaurant_id: &str, table_id: &str) -> Self {
      Self {
         restaurant_id: restaurant_id.to_owned(),
         table_id: table_id.to_owned(),
         ..Self::default()
      }
   }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadItem {
   pub menu_item_id: MenuItemId,
   pub quantity: u32,
   pub addons: Vec<MenuAddon>,
}

// Body of the order create/update request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
   pub items: Vec<PayloadItem>,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub customer_name: Option<String>,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub instructions: Option<String>,
}

impl OrderPayload {
   pub fn from_cart(cart: &Cart, session: &OrderSession) -> Self {
      let items = cart.lines().iter()
         .map(|l| PayloadItem {
            menu_item_id: l.menu_item_id.clone(),
            quantity: l.quantity,
            addons: l.addons.clone(),
         })
         .collect();

      Self {
         items,
         customer_name: session.customer_name.clone(),
         instructions: session.instructions.clone(),
      }
   }
}
