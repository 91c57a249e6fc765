/* ===============================================================================
QR menu ordering core.
Crate root. 27 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

// In-memory core of the QR menu ordering app: the cart an order is built
// in, the addon selection rules, and the grouping of the order change log
// into edit sessions. Networking, rendering and persistence stay with the
// surrounding application.

pub mod cart;
pub mod history;
pub mod menu;
pub mod money;
pub mod order;
pub mod selection;

pub use cart::{Cart, CartInfo, CartLineItem, LineId, UNKNOWN_ITEM};
pub use history::{group_sessions, Actor, ChangeEvent, ChangeType, EditSession, SessionGrouping};
pub use menu::{AddonGroup, MenuAddon, MenuItem, MenuItemId};
pub use money::Money;
pub use order::{ItemRef, OrderPayload, OrderSession, PayloadItem, PersistedLine, PopulatedItem};
pub use selection::{price_with_addons, toggle_addon, AddonSelection};
