//! Wire and storage types for accounts, symptom entries, and shares.

pub mod clinician;
pub mod entry;
pub mod patient;
pub mod role;
pub mod share;

pub use clinician::*;
pub use entry::*;
pub use patient::*;
pub use role::*;
pub use share::*;
