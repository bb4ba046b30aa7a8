//! Request extractors that reject with the JSON error envelope

pub mod request;

pub use request::{IdPath, ValidJson, ValidQuery};
