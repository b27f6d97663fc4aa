//! Typed identifier newtypes for externally assigned string ids.
//!
//! Cameras and dashboards are registered in the backend with free-form ids
//! (`"cam-01"`, `"sala-controle"`), so these wrap a non-empty `String`
//! rather than generating their own values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $field:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an id, rejecting blank values.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyField`] when `value` is empty
            /// after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyField($field));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Borrow the raw id.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Camera`](crate::camera::Camera).
    CameraId,
    "camera_id"
);

define_id!(
    /// Identifier of a [`Dashboard`](crate::dashboard::Dashboard).
    DashboardId,
    "dashboard_id"
);
