//! Domain models shared by the HTTP API, the services, and the SDB serializer.
//!
//! Enumerated equipment properties travel as their exact display strings (`"Tone Burst"`,
//! `"DiSEqC 1.2"`, `"Left Circular"`, ...) both over JSON and inside SDB documents, so every
//! enum here serializes to and parses from that literal string.

pub mod activity;
pub mod api;
pub mod configuration;
pub mod equipment;
pub mod mapping;
pub mod project;
pub mod satellite;

use thiserror::Error;

/// A string did not match any of the accepted values for an enumerated field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value {value:?} for {field}")]
pub struct UnknownValue {
    /// Name of the field as it appears in the API.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownValue {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Declares an enum whose variants map one-to-one onto fixed wire strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::model::UnknownValue::new($field, other)),
                }
            }
        }
    };
}

pub(crate) use wire_enum;
