use std::fmt;

use serde::Serialize;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a backend-assigned id.
            #[inline]
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

handle!(
    /// Opaque handle to a solid-color brush owned by a backend.
    BrushId
);
handle!(
    /// Opaque handle to a font owned by a backend.
    FontId
);
handle!(
    /// Opaque handle to geometry uploaded to a backend.
    GeometryId
);
