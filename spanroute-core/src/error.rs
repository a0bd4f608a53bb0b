//! Error types for the spanroute core library.
//!
//! Every failure surfaced by the queues, the disjoint set and the graph
//! queries is a [`SpanrouteError`]. Each variant carries a stable
//! [`SpanrouteErrorCode`] for logs and a coarse [`ErrorKind`] that groups the
//! variants into invalid input, empty containers and missing paths.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => ($code:expr, $kind:ident)
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
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the [`ErrorKind`] this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Retrieve the [`ErrorKind`] classifying this error.
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Coarse classification shared by every [`SpanrouteError`] variant.
///
/// Callers that only need to distinguish bad input from an empty queue or a
/// missing path can match on the kind instead of the individual variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Malformed input or an operation that contradicts the structure's state.
    InvalidArgument,
    /// An extraction or peek was attempted on an empty priority queue.
    EmptyContainer,
    /// No path joins the requested endpoints.
    NoPathExists,
}

impl ErrorKind {
    /// Return the stable machine-readable representation of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::EmptyContainer => "EMPTY_CONTAINER",
            Self::NoPathExists => "NO_PATH_EXISTS",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a shortest-path query could not produce a path.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NoPathReason {
    /// The start vertex is not part of the graph.
    UnknownStart,
    /// The end vertex is not part of the graph.
    UnknownEnd,
    /// Both vertices exist but the end cannot be reached from the start.
    Unreachable,
}

impl fmt::Display for NoPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownStart => "start vertex is not in the graph",
            Self::UnknownEnd => "end vertex is not in the graph",
            Self::Unreachable => "end vertex is unreachable from the start vertex",
        })
    }
}

/// Error type produced by the spanroute core library.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpanrouteError {
    /// An edge carried a weight below zero.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the edge in the graph's edge collection.
        edge: usize,
        /// The offending weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has a non-finite weight")]
    NonFiniteWeight {
        /// Position of the edge in the graph's edge collection.
        edge: usize,
    },
    /// An edge endpoint is missing from the vertex collection.
    #[error("edge {edge} references a vertex outside the vertex collection")]
    UnknownEndpoint {
        /// Position of the edge in the graph's edge collection.
        edge: usize,
    },
    /// The vertex collection listed the same vertex twice.
    #[error("vertex at position {position} duplicates an earlier vertex")]
    DuplicateVertex {
        /// Position of the repeated vertex in the supplied collection.
        position: usize,
    },
    /// `make_set` was called for an item that already has a set.
    #[error("item is already registered in the disjoint set")]
    AlreadyRegistered,
    /// A disjoint-set lookup referenced an item that was never registered.
    #[error("item was never registered in the disjoint set")]
    UnregisteredItem,
    /// `union` was called for two items that already share a set.
    #[error("items already share the set represented by {representative}")]
    AlreadyJoined {
        /// Representative id of the shared set.
        representative: usize,
    },
    /// A key was inserted into an indexed queue that already holds it.
    #[error("key is already queued")]
    DuplicateKey,
    /// A priority update referenced a key that is not queued.
    #[error("key is not queued")]
    UnknownKey,
    /// A priority could not be ordered against itself (for example NaN).
    #[error("priority has no place in the total order")]
    UnorderedPriority,
    /// `decrease_priority` received a priority larger than the current one.
    #[error("decrease_priority received a larger priority")]
    PriorityIncrease,
    /// `peek_min` or `remove_min` was invoked on an empty queue.
    #[error("priority queue is empty")]
    EmptyContainer,
    /// A shortest-path query found no path between its endpoints.
    #[error("no path exists: {reason}")]
    NoPathExists {
        /// Why the path could not be produced.
        reason: NoPathReason,
    },
}

define_error_codes! {
    /// Stable codes describing [`SpanrouteError`] variants.
    enum SpanrouteErrorCode for SpanrouteError {
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => ("NEGATIVE_WEIGHT", InvalidArgument),
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => ("NON_FINITE_WEIGHT", InvalidArgument),
        /// An edge endpoint is missing from the vertex collection.
        UnknownEndpoint => UnknownEndpoint { .. } => ("UNKNOWN_ENDPOINT", InvalidArgument),
        /// The vertex collection listed the same vertex twice.
        DuplicateVertex => DuplicateVertex { .. } => ("DUPLICATE_VERTEX", InvalidArgument),
        /// `make_set` was called for an item that already has a set.
        AlreadyRegistered => AlreadyRegistered => ("ALREADY_REGISTERED", InvalidArgument),
        /// A disjoint-set lookup referenced an unregistered item.
        UnregisteredItem => UnregisteredItem => ("UNREGISTERED_ITEM", InvalidArgument),
        /// `union` was called for two items that already share a set.
        AlreadyJoined => AlreadyJoined { .. } => ("ALREADY_JOINED", InvalidArgument),
        /// A key was inserted twice into an indexed queue.
        DuplicateKey => DuplicateKey => ("DUPLICATE_KEY", InvalidArgument),
        /// A priority update referenced a key that is not queued.
        UnknownKey => UnknownKey => ("UNKNOWN_KEY", InvalidArgument),
        /// A priority could not be ordered against itself.
        UnorderedPriority => UnorderedPriority => ("UNORDERED_PRIORITY", InvalidArgument),
        /// `decrease_priority` received a larger priority.
        PriorityIncrease => PriorityIncrease => ("PRIORITY_INCREASE", InvalidArgument),
        /// `peek_min` or `remove_min` was invoked on an empty queue.
        EmptyContainer => EmptyContainer => ("EMPTY_CONTAINER", EmptyContainer),
        /// A shortest-path query found no path between its endpoints.
        NoPathExists => NoPathExists { .. } => ("NO_PATH_EXISTS", NoPathExists),
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SpanrouteError>;
