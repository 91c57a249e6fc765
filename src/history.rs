/* ===============================================================================
QR menu ordering core.
Order change log and edit sessions. 19 Mar 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use smart_default::SmartDefault;
use strum::{AsRefStr, EnumString};

// ============================================================================
// [Change events]
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
   #[strum(serialize = "customer")]
   Customer,
   #[strum(serialize = "staff")]
   Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
   #[strum(serialize = "item_added")]
   ItemAdded,
   #[strum(serialize = "item_removed")]
   ItemRemoved,
   #[strum(serialize = "quantity_increased")]
   QuantityIncreased,
   #[strum(serialize = "quantity_decreased")]
   QuantityDecreased,
}

// One entry of the append-only order change log, read as-is from the
// order-history service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
   pub timestamp: DateTime<Utc>,
   pub changed_by: Actor,
   pub change_type: ChangeType,
   pub item_name: String,
   #[serde(default)]
   pub old_quantity: Option<u32>,
   #[serde(default)]
   pub new_quantity: Option<u32>,
}

// ============================================================================
// [Edit sessions]
// ============================================================================

// Changes that happened together, one save that touched several items
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
   // 1-based, assigned in forward chronological order
   pub session_number: usize,
   // Timestamp and actor of the first event in the session
   pub timestamp: DateTime<Utc>,
   pub changed_by: Actor,
   pub changes: Vec<ChangeEvent>,
}

impl EditSession {
   // "Update #N" label against the reversed list, the most recent is #1
   pub fn display_number(&self, total_sessions: usize) -> usize {
      total_sessions - self.session_number + 1
   }
}

// Splits the flat change log into sessions wherever consecutive events are
// further apart than the gap. 2 seconds separates one save producing
// several log entries from two distinct edit operations.
#[derive(Debug, Clone, Copy, SmartDefault)]
pub struct SessionGrouping {
   #[default(_code = "Duration::milliseconds(2000)")]
   pub gap: Duration,
}

impl SessionGrouping {
   // Expects a chronologically sorted log, returns the sessions most
   // recent first. A negative gap from an out-of-order entry never starts
   // a new session.
   pub fn group(&self, events: &[ChangeEvent]) -> Vec<EditSession> {
      let first = match events.first() {
         Some(first) => first,
         None => return Vec::new(),
      };

      let mut sessions: Vec<EditSession> = Vec::new();
      let mut current = vec![first.clone()];
      let mut start = first.timestamp;
      let mut actor = first.changed_by;

      for pair in events.windows(2) {
         let (prev, event) = (&pair[0], &pair[1]);
         if event.timestamp - prev.timestamp > self.gap {
            close(&mut sessions, std::mem::take(&mut current), start, actor);
            start = event.timestamp;
            actor = event.changed_by;
         }
         current.push(event.clone());
      }
      close(&mut sessions, current, start, actor);

      // Numbered forward, displayed most recent first
      sessions.reverse();
      sessions
   }
}

fn close(sessions: &mut Vec<EditSession>, changes: Vec<ChangeEvent>, start: DateTime<Utc>, actor: Actor) {
   sessions.push(EditSession {
      session_number: sessions.len() + 1,
      timestamp: start,
      changed_by: actor,
      changes,
   });
}

// Grouping with the stock 2-second threshold
pub fn group_sessions(events: &[ChangeEvent]) -> Vec<EditSession> {
   SessionGrouping::default().group(events)
}
