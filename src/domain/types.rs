//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, known staff
//! levels, non-zero page windows) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided staff level is outside of the supported range.
    #[error("unknown staff level: {0}")]
    UnknownStaffLevel(i32),
    /// Page number must start at one.
    #[error("page number must be greater than zero")]
    ZeroPage,
    /// Rows per page must be at least one.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(StaffId, "Unique identifier for a staff member.");
id_newtype!(TicketId, "Unique identifier for a support ticket.");
id_newtype!(DepartmentId, "Unique identifier for a support department.");

/// Access level of a session. Higher levels include the lower ones.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub enum StaffLevel {
    /// Authenticated, but without any staff privileges.
    Guest = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

impl TryFrom<i32> for StaffLevel {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Guest),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(TypeConstraintError::UnknownStaffLevel(other)),
        }
    }
}

impl From<StaffLevel> for i32 {
    fn from(value: StaffLevel) -> Self {
        value as i32
    }
}

impl Display for StaffLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "staff_{}", i32::from(*self))
    }
}
