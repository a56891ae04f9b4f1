//! Storage adapters implementing the profile store port.

mod fs_profile_store;
mod in_memory_profile_store;

pub use fs_profile_store::FsProfileStore;
pub use in_memory_profile_store::InMemoryProfileStore;
