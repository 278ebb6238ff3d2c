//! Error types for the Treeline core library.
//!
//! Defines the error enum exposed by the public API, a stable error-code
//! surface for logging, and a convenient result alias.

use std::{fmt, sync::Arc};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while preparing or running a spanning-tree
/// computation.
///
/// All validation happens before the disjoint-set is mutated, so a returned
/// error never leaves partial results behind. Node identifiers are rendered
/// into the error at construction time so the type stays independent of the
/// caller's node type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MstError {
    /// The caller supplied an empty node set.
    EmptyNodeSet,
    /// The caller's node sequence contained the same node twice.
    DuplicateNode {
        /// The repeated node identifier.
        node: Arc<str>,
    },
    /// An edge referenced a node that is not a member of the node set.
    UnknownEndpoint {
        /// The unknown node identifier referenced by an edge.
        node: Arc<str>,
    },
    /// An edge carried a non-finite weight (NaN or infinity).
    NonFiniteWeight {
        /// Source endpoint of the offending edge, as supplied.
        source: Arc<str>,
        /// Target endpoint of the offending edge, as supplied.
        target: Arc<str>,
    },
    /// A disjoint-set operation was invoked with a node outside the
    /// initialised set. This signals a programming-contract violation:
    /// engine-validated inputs can never trigger it.
    UnknownNode {
        /// The node identifier outside the initialised set.
        node: Arc<str>,
    },
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNodeSet => {
                f.write_str("cannot compute a spanning tree over an empty node set")
            }
            Self::DuplicateNode { node } => {
                write!(f, "node `{node}` appears more than once in the node set")
            }
            Self::UnknownEndpoint { node } => {
                write!(f, "edge references node `{node}`, which is not in the node set")
            }
            Self::NonFiniteWeight { source, target } => {
                write!(f, "edge ({source}, {target}) has non-finite weight")
            }
            Self::UnknownNode { node } => {
                write!(f, "disjoint-set operation on unknown node `{node}`")
            }
        }
    }
}

impl std::error::Error for MstError {}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller supplied an empty node set.
        EmptyNodeSet => EmptyNodeSet => "EMPTY_NODE_SET",
        /// The caller's node sequence contained the same node twice.
        DuplicateNode => DuplicateNode { .. } => "DUPLICATE_NODE",
        /// An edge referenced a node that is not a member of the node set.
        UnknownEndpoint => UnknownEndpoint { .. } => "UNKNOWN_ENDPOINT",
        /// An edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "NON_FINITE_WEIGHT",
        /// A disjoint-set operation was invoked with an unknown node.
        UnknownNode => UnknownNode { .. } => "UNKNOWN_NODE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
