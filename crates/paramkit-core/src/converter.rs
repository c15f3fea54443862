//! Configured derivation of parameters and paths.

use serde::Serialize;

use crate::config::Config;
use crate::endpoint::{Endpoint, Method};
use crate::introspect::{build_parameters, Parameters};
use crate::keys::{ExclusionSet, KnownKeys, PlaceholderSet};
use crate::placeholder::{extract_placeholders, substitute};

/// Derives parameters, path keys and resolved paths using a fixed set of known keys.
///
/// [`Endpoint`]'s provided methods go through a converter built from
/// [`Endpoint::known_keys`]; use one directly to apply keys from a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    known_keys: KnownKeys,
}

impl Converter {
    /// Converter using the known keys of `config`
    pub fn new(config: &Config) -> Self {
        Self::with_known_keys(config.known_keys.clone())
    }

    /// Converter using `known_keys` directly
    pub fn with_known_keys(known_keys: KnownKeys) -> Self {
        Self { known_keys }
    }

    /// Known keys applied by this converter
    pub fn known_keys(&self) -> &KnownKeys {
        &self.known_keys
    }

    /// Distinct placeholder identifiers of the endpoint's path template
    pub fn path_keys<E: Endpoint + ?Sized>(&self, endpoint: &E) -> PlaceholderSet {
        extract_placeholders(endpoint.path())
    }

    /// Path template with `{field}` tokens replaced by field values
    pub fn parsed_path<E: Endpoint + ?Sized>(&self, endpoint: &E) -> String {
        substitute(endpoint, endpoint.path(), &self.known_keys)
    }

    /// Fields other than known keys and path keys, as request parameters
    pub fn parameters<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Parameters {
        let excluded = ExclusionSet::new(&self.known_keys, self.path_keys(endpoint));
        build_parameters(endpoint, &excluded)
    }

    /// Snapshot of every derived value of `endpoint`
    pub fn summarize<E: Endpoint + ?Sized>(&self, endpoint: &E) -> EndpointSummary {
        let path_keys = self.path_keys(endpoint);
        let excluded = ExclusionSet::new(&self.known_keys, path_keys.clone());
        EndpointSummary {
            method: endpoint.method(),
            path: endpoint.path().to_string(),
            path_keys,
            parsed_path: self.parsed_path(endpoint),
            parameters: build_parameters(endpoint, &excluded),
        }
    }
}

/// All values derived from one endpoint descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointSummary {
    pub method: Method,
    pub path: String,
    pub path_keys: PlaceholderSet,
    pub parsed_path: String,
    pub parameters: Parameters,
}
