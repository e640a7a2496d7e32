//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Aircraft and passenger ids are
//! handed out sequentially by [`IdSupply`][crate::IdSupply]; process ids are
//! allocated by the engine kernel.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($label:literal);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// The raw sequence number.
            #[inline(always)]
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $label, self.0)
            }
        }

        impl From<u32> for $name {
            #[inline(always)]
            fn from(n: u32) -> $name {
                $name(n)
            }
        }

        impl From<$name> for u32 {
            #[inline(always)]
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

typed_id! {
    /// An aircraft drawn from the arrival supply.
    pub struct AircraftId("Aircraft");
}

typed_id! {
    /// A passenger drawn from the arrival supply.
    pub struct PassengerId("Passenger");
}

typed_id! {
    /// A logical process registered with the engine kernel.
    pub struct ProcessId("Process");
}
