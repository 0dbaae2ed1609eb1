//! Typed choice enumerations with database-choice metadata.
//!
//! Declare an enumeration with [`choice_enum!`]: every member carries a stored
//! value (`i16` for small-integer columns, `&'static str` for varchar columns)
//! and a display label. Member names are the SCREAMING_SNAKE form of the
//! variant identifier, so `ResetToken` is known as `RESET_TOKEN`.
//!
//! ```
//! use bazaar_domain::choice::ChoiceEnum;
//! use bazaar_domain::choice_enum;
//!
//! choice_enum! {
//!     pub enum Size: i16 {
//!         Small = 0 => "Small",
//!         Large = 1 => "Large",
//!     }
//! }
//!
//! assert_eq!(Size::choices(), vec![(0, "Small"), (1, "Large")]);
//! assert_eq!(Size::default_value(), 0);
//! assert_eq!(Size::from_name("large"), Some(Size::Large));
//! ```

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// A value submitted for an enum-backed field that matches no member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid choice for {field}")]
pub struct InvalidChoice {
    pub field: &'static str,
    pub value: String,
}

/// Reverse-lookup key for [`ChoiceEnum::get`].
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a, V> {
    /// Match on the stored value.
    Value(V),
    /// Match on the member name, case-insensitively.
    Name(&'a str),
}

pub trait ChoiceEnum: Copy + Eq + Sized + 'static {
    type Value: Copy + Ord + fmt::Debug + fmt::Display + 'static;

    /// Members in declaration order. Never empty.
    const MEMBERS: &'static [Self];

    fn value(self) -> Self::Value;

    /// Variant identifier as written in the declaration.
    fn ident(self) -> &'static str;

    fn label(self) -> &'static str;

    fn name(self) -> String {
        screaming_snake(self.ident())
    }

    fn members() -> &'static [Self] {
        Self::MEMBERS
    }

    /// `(value, label)` pairs in declaration order.
    fn choices() -> Vec<(Self::Value, &'static str)> {
        Self::MEMBERS
            .iter()
            .map(|member| (member.value(), member.label()))
            .collect()
    }

    /// The first declared choice.
    fn default_member() -> Self {
        Self::MEMBERS[0]
    }

    fn default_value() -> Self::Value {
        Self::default_member().value()
    }

    fn from_value<Q>(value: &Q) -> Option<Self>
    where
        Q: ?Sized + PartialEq,
        Self::Value: Borrow<Q>,
    {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.value().borrow() == value)
    }

    fn from_name(name: &str) -> Option<Self> {
        let key = name.to_uppercase();
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.name() == key)
    }

    fn get(lookup: Lookup<'_, Self::Value>) -> Option<Self> {
        match lookup {
            Lookup::Value(value) => Self::from_value(&value),
            Lookup::Name(name) => Self::from_name(name),
        }
    }

    /// Stored value for a member name, case-insensitively.
    fn key(name: &str) -> Option<Self::Value> {
        Self::from_name(name).map(Self::value)
    }

    fn name_of<Q>(value: &Q) -> Option<String>
    where
        Q: ?Sized + PartialEq,
        Self::Value: Borrow<Q>,
    {
        Self::from_value(value).map(Self::name)
    }

    fn label_of<Q>(value: &Q) -> Option<&'static str>
    where
        Q: ?Sized + PartialEq,
        Self::Value: Borrow<Q>,
    {
        Self::from_value(value).map(Self::label)
    }

    /// A zeroed tally keyed by every stored value.
    fn counter() -> BTreeMap<Self::Value, u64> {
        Self::MEMBERS
            .iter()
            .map(|member| (member.value(), 0))
            .collect()
    }

    /// `(name, value)` pairs sorted by value.
    fn items() -> Vec<(String, Self::Value)> {
        let mut items: Vec<_> = Self::MEMBERS
            .iter()
            .map(|member| (member.name(), member.value()))
            .collect();
        items.sort_by_key(|(_, value)| *value);
        items
    }

    fn to_list() -> Vec<String> {
        Self::MEMBERS
            .iter()
            .map(|member| member.name().to_lowercase())
            .collect()
    }

    /// Members allowed to move into `to`, besides `to` itself.
    fn transition_origins(_to: Self) -> &'static [Self] {
        &[]
    }

    fn is_valid_transition(from: Self, to: Self) -> bool {
        from == to || Self::transition_origins(to).contains(&from)
    }

    /// Resolve a submitted value for `field`, or report it as an invalid choice.
    fn parse<Q>(field: &'static str, value: &Q) -> Result<Self, InvalidChoice>
    where
        Q: ?Sized + PartialEq + fmt::Display,
        Self::Value: Borrow<Q>,
    {
        Self::from_value(value).ok_or_else(|| InvalidChoice {
            field,
            value: value.to_string(),
        })
    }
}

fn screaming_snake(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Declare a [`ChoiceEnum`].
///
/// An optional `transitions` block lists, per target member, the members
/// that may move into it.
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $value_ty:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr => $label:literal ),+ $(,)?
        }
        $(
            transitions {
                $( $to:ident <= [ $( $from:ident ),* $(,)? ] ),* $(,)?
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::choice::ChoiceEnum for $name {
            type Value = $value_ty;

            const MEMBERS: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn value(self) -> Self::Value {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            fn ident(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            $(
                fn transition_origins(to: Self) -> &'static [Self] {
                    #[allow(unreachable_patterns)]
                    match to {
                        $( Self::$to => &[ $( Self::$from ),* ], )*
                        _ => &[],
                    }
                }
            )?
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::choice::ChoiceEnum::name(*self))
            }
        }
    };
}
