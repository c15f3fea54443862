//! The endpoint descriptor capability.
//!
//! An [`Endpoint`] is any [`Reflect`] value that also knows its path template.
//! Implementing `path` is enough to get the four derived values:
//! [`Endpoint::known_keys`], [`Endpoint::path_keys`], [`Endpoint::parsed_path`]
//! and [`Endpoint::parameters`]. Each is recomputed on every call.
//!
//! # Examples
//!
//! ```
//! use paramkit_core::{Endpoint, Field, Reflect};
//!
//! struct GetUser {
//!     id: u64,
//!     verbose: bool,
//! }
//!
//! impl Reflect for GetUser {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::primitive("id", self.id),
//!             Field::primitive("verbose", self.verbose),
//!         ]
//!     }
//! }
//!
//! impl Endpoint for GetUser {
//!     fn path(&self) -> &str {
//!         "/user/{id}"
//!     }
//! }
//!
//! let request = GetUser { id: 1, verbose: true };
//! assert_eq!(request.parsed_path(), "/user/1");
//! assert!(!request.parameters().contains_key("id"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::converter::Converter;
use crate::introspect::Parameters;
use crate::keys::{KnownKeys, PlaceholderSet};
use crate::reflect::Reflect;
use crate::Error;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Upper-case verb, e.g. `"GET"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(Error::descriptor(format!("unknown HTTP method '{other}'"))),
        }
    }
}

/// A value describing an HTTP endpoint.
pub trait Endpoint: Reflect {
    /// Path template, e.g. `/user/{id}`
    fn path(&self) -> &str;

    /// HTTP method, `GET` unless overridden
    fn method(&self) -> Method {
        Method::Get
    }

    /// Field names that never become parameters or path substitutions
    fn known_keys(&self) -> KnownKeys {
        KnownKeys::default()
    }

    /// Distinct placeholder identifiers of [`Endpoint::path`]
    fn path_keys(&self) -> PlaceholderSet {
        Converter::with_known_keys(self.known_keys()).path_keys(self)
    }

    /// [`Endpoint::path`] with `{field}` tokens replaced by field values
    fn parsed_path(&self) -> String {
        Converter::with_known_keys(self.known_keys()).parsed_path(self)
    }

    /// Fields other than known keys and path keys, as request parameters
    fn parameters(&self) -> Parameters {
        Converter::with_known_keys(self.known_keys()).parameters(self)
    }
}
