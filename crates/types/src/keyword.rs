//! Enumerated attribute values.
//!
//! Report documents spell enumerations as bare words (`Center`, `TopDown`,
//! `RetainShape`...). The editor hands the codec whatever string the user
//! picked, so the model keeps a [`Keyword`]: a known member when the word is
//! recognised, the raw text otherwise. Only known members ever reach a
//! generated document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An enumeration whose members have a fixed document spelling.
pub trait KeywordEnum: Copy + Sized + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn from_keyword(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeywordError {
    pub expected: &'static str,
    pub found: String,
}

impl fmt::Display for ParseKeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.found, self.expected)
    }
}

impl std::error::Error for ParseKeywordError {}

/// Declares a [`KeywordEnum`] together with `Display`, `FromStr` and serde
/// impls that all use the document spelling.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $crate::keyword::KeywordEnum for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::keyword::KeywordEnum::as_str(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::keyword::ParseKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::keyword::KeywordEnum>::from_keyword(s).ok_or_else(|| {
                    $crate::keyword::ParseKeywordError {
                        expected: stringify!($name),
                        found: s.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use keyword_enum;

/// A value for an enumerated attribute as supplied by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keyword<T> {
    Known(T),
    /// Text that names no member of `T`. Never written to a document.
    Other(String),
}

impl<T: KeywordEnum> Keyword<T> {
    /// Classifies raw text; never fails.
    pub fn parse(raw: &str) -> Self {
        match T::from_keyword(raw) {
            Some(member) => Keyword::Known(member),
            None => Keyword::Other(raw.to_string()),
        }
    }

    /// The member, if the value is one.
    pub fn known(&self) -> Option<T> {
        match self {
            Keyword::Known(member) => Some(*member),
            Keyword::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Keyword::Known(member) => member.as_str(),
            Keyword::Other(raw) => raw,
        }
    }
}

impl<T> From<T> for Keyword<T> {
    fn from(member: T) -> Self {
        Keyword::Known(member)
    }
}
