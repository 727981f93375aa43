//! Core State trait for state identifiers.
//!
//! Every value a machine can be in implements this trait. The engine only
//! compares, hashes and clones states; it never interprets them.

use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Trait for state identifiers.
///
/// All methods are pure. A state is an opaque token drawn from the fixed set
/// a machine's owner registers.
///
/// # Required Traits
///
/// - `Clone`: The current state is handed to listeners by reference and stored
/// - `Eq` + `Hash`: States key the transition table and listener registry
/// - `Debug`: States must be debuggable for diagnostics
/// - `Send` + `Sync`: Machines can be moved across threads
///
/// Implementations are provided for `String` and `&'static str`, so ad hoc
/// machines can use plain strings. Enums usually come from
/// [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum OrderState {
///     Placed,
///     Shipped,
///     Cancelled,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Placed => "placed",
///             Self::Shipped => "shipped",
///             Self::Cancelled => "cancelled",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Shipped | Self::Cancelled)
///     }
/// }
///
/// assert_eq!(OrderState::Placed.name(), "placed");
/// assert!(OrderState::Cancelled.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational; the transition table alone decides what is
    /// reachable. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Error returned when a token does not name any variant of a state enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} state '{token}'")]
pub struct ParseStateError {
    pub kind: &'static str,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Shipment {
            Packed => "packed",
            InTransit => "in_transit",
            Delivered => "delivered",
            Lost => "lost",
        }
        final: [Delivered, Lost]
        error: [Lost]
    }

    state_enum! {
        enum Toggle {
            On,
            Off,
        }
    }

    fn describe<S: State>(state: &S) -> (String, bool, bool) {
        (state.name().to_string(), state.is_final(), state.is_error())
    }

    #[test]
    fn string_states_name_themselves() {
        let owned = String::from("scheduled");
        assert_eq!(describe(&owned), ("scheduled".to_string(), false, false));

        let borrowed: &'static str = "pending";
        assert_eq!(describe(&borrowed), ("pending".to_string(), false, false));
    }

    #[test]
    fn string_states_are_never_final_or_error() {
        for token in ["done", "error", "failed", ""] {
            assert!(!token.is_final());
            assert!(!token.is_error());
            assert!(!token.to_string().is_final());
        }
    }

    #[test]
    fn generated_states_use_their_tokens() {
        assert_eq!(Shipment::InTransit.name(), "in_transit");
        assert_eq!(Toggle::Off.name(), "Off");
    }

    #[test]
    fn generated_states_classify_final_and_error() {
        let classified: Vec<(bool, bool)> = Shipment::ALL
            .iter()
            .map(|state| (state.is_final(), state.is_error()))
            .collect();

        assert_eq!(
            classified,
            vec![(false, false), (false, false), (true, false), (true, true)]
        );
    }

    #[test]
    fn generated_states_default_to_neither_final_nor_error() {
        assert!(Toggle::ALL.iter().all(|state| !state.is_final() && !state.is_error()));
    }

    #[test]
    fn parse_error_names_kind_and_token() {
        let err = "misplaced".parse::<Shipment>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown Shipment state 'misplaced'");

        let err = ParseStateError {
            kind: "install",
            token: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown install state 'bogus'");
    }
}
