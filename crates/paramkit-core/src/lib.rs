//! paramkit Core Library
//!
//! This library derives request parameters and resolved URL paths from
//! endpoint descriptors: values that list their named fields and carry a
//! path template such as `/user/{id}`.

pub mod config;
pub mod converter;
pub mod descriptor;
pub mod endpoint;
pub mod error;
pub mod introspect;
pub mod keys;
pub mod placeholder;
pub mod reflect;

pub use crate::{
    config::Config,
    converter::{Converter, EndpointSummary},
    descriptor::DescriptorDocument,
    endpoint::{Endpoint, Method},
    error::{Error, Result},
    introspect::Parameters,
    keys::{KnownKeys, PlaceholderSet, KNOWN_KEYS},
    reflect::{Field, FieldValue, Primitive, Reflect},
};
