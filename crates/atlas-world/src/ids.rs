//! Stable identifiers for world entries.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entry_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entry_id!(
    /// Key of a point of interest.
    LocationId,
    "loc"
);
entry_id!(
    /// Key of a settlement footprint.
    SettlementId,
    "settlement"
);
entry_id!(
    /// Key of a named region.
    RegionId,
    "region"
);
