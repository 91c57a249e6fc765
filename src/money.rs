/* ===============================================================================
QR menu ordering core.
Money in minor units. 27 Feb 2024.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2024 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{fmt, iter::Sum, ops::Mul};
use derive_more::{Add, From};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Minor units per major unit (cents, paise and so on)
const SCALE: i64 = 100;

// Amount of money as a whole number of minor units, so repeated addition
// of prices never accumulates binary rounding error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Add)]
pub struct Money(i64);

impl Money {
   pub const fn zero() -> Self {
      Self(0)
   }

   pub const fn from_minor(minor: i64) -> Self {
      Self(minor)
   }

   // Whole major units, e.g. from_major(10) is 10.00
   pub const fn from_major(major: i64) -> Self {
      Self(major * SCALE)
   }

   pub const fn minor(self) -> i64 {
      self.0
   }

   // Price with the currency suffix from the restaurant settings
   pub fn with_unit(self, unit: &str) -> String {
      format!("{}{}", self, unit)
   }
}

impl fmt::Display for Money {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let sign = if self.0 < 0 { "-" } else { "" };
      let abs = self.0.unsigned_abs();
      write!(f, "{}{}.{:02}", sign, abs / SCALE as u64, abs % SCALE as u64)
   }
}

impl Mul<u32> for Money {
   type Output = Money;

   fn mul(self, quantity: u32) -> Money {
      Money(self.0 * quantity as i64)
   }
}

impl Sum for Money {
   fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
      iter.fold(Money::zero(), |acc, m| acc + m)
   }
}

// The remote API exchanges prices as plain decimal numbers
impl Serialize for Money {
   fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
      serializer.serialize_f64(self.0 as f64 / SCALE as f64)
   }
}

impl<'de> Deserialize<'de> for Money {
   fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
      // Round to the nearest minor unit, the API sends values like 2.5 or 19.99
      let major = f64::deserialize(deserializer)?;
      Ok(Money((major * SCALE as f64).round() as i64))
   }
}

// ============================================================================
// [Tests]
// ============================================================================
#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   #[test]
   fn display_and_unit() {
      assert_eq!(Money::from_minor(1250).to_string(), "12.50");
      assert_eq!(Money::from_major(7).to_string(), "7.00");
      assert_eq!(Money::from_minor(5).to_string(), "0.05");
      assert_eq!(Money::from_minor(-305).to_string(), "-3.05");
      assert_eq!(Money::from_minor(990).with_unit("₹"), "9.90₹");
   }

   #[test]
   fn arithmetic() {
      let total: Money = [Money::from_minor(1000), Money::from_minor(250)]
         .into_iter()
         .sum();
      assert_eq!(total, Money::from_minor(1250));
      assert_eq!(total * 3, Money::from_minor(3750));
      assert_eq!(Money::zero() * 100, Money::zero());
   }

   #[test]
   fn decimal_wire_format() {
      // Inbound values are decimal JSON numbers, integer or fractional
      let m: Money = serde_json::from_str("2.5").unwrap();
      assert_eq!(m, Money::from_minor(250));
      let m: Money = serde_json::from_str("19.99").unwrap();
      assert_eq!(m, Money::from_minor(1999));
      let m: Money = serde_json::from_str("40").unwrap();
      assert_eq!(m, Money::from_major(40));

      assert_eq!(serde_json::to_value(Money::from_minor(250)).unwrap(), json!(2.5));
   }
}
