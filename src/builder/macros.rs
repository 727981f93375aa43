//! Macros for ergonomic state declaration.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// Each variant may carry the token it serializes to and displays as;
/// without one, the variant name is used. The macro also generates an `ALL`
/// constant listing every variant in declaration order, plus `Display` and
/// `FromStr` over the tokens.
///
/// # Example
///
/// ```
/// use statecraft::core::State;
/// use statecraft::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Pending => "pending",
///         Scheduled => "scheduled",
///         Done => "done",
///         Failed,
///     }
///     final: [Done, Failed]
///     error: [Failed]
/// }
///
/// assert_eq!(Phase::Pending.name(), "pending");
/// assert_eq!(Phase::Failed.name(), "Failed");
/// assert_eq!("done".parse::<Phase>().unwrap(), Phase::Done);
/// assert_eq!(Phase::ALL.len(), 4);
/// ```
#[macro_export]
macro_rules! state_enum {
    (@token $variant:ident) => {
        stringify!($variant)
    };
    (@token $variant:ident $token:literal) => {
        $token
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $token:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $token)])?
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@token $variant $($token)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseStateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|state| $crate::core::State::name(state) == s)
                    .ok_or_else(|| $crate::core::ParseStateError {
                        kind: stringify!($name),
                        token: s.to_string(),
                    })
            }
        }
    };
}
