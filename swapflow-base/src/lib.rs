//! Base components for SwapFlow
//!
//! Ids, id errors and the [`ObjectStore`] used to hold the immutable step and path registries.

mod errors;
pub use errors::IdError;

pub mod id;

mod object_store;
pub use object_store::{ ObjectStore, ObjectStoreContent };

generate_id_type!(ChatId);

#[cfg(test)]
mod test;
