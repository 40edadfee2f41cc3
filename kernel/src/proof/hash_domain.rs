//! Typed domain separators for canonical hashing.
//!
//! Every digest in the workspace is computed under one [`HashDomain`], so a
//! grid and a trace that happen to canonicalize to the same bytes still hash
//! differently. Adding a domain is one line in the macro invocation below.

/// Declares `HashDomain`, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix that is fed
        /// to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Grid content: dimensions, wall mask, start and goal.
    Grid => b"GRIDSTAR::GRID::V1\0",

    /// Ordered step events of one search run.
    SearchTrace => b"GRIDSTAR::SEARCH_TRACE::V1\0",

    /// A reconstructed start-to-goal coordinate sequence.
    SearchPath => b"GRIDSTAR::SEARCH_PATH::V1\0",

    /// A rendered text frame (used by the cross-process fixture).
    RenderFrame => b"GRIDSTAR::RENDER_FRAME::V1\0",
}
