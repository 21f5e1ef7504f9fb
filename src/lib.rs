// netparams_registry/src/lib.rs

pub mod address;
pub mod builtin;
pub mod chainparams;
pub mod error;
pub mod p2p;
pub mod registry;
pub mod settings;

// Re-export for easier access from callers
pub use chainparams::{Network, NetworkMode, NetworkSpec};
pub use error::{AddressError, RegistryError};
pub use registry::{NetworkField, NetworkKey, NetworkRegistry, NetworkView};
