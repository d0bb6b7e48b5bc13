//! Pure, synchronous derivations over already-fetched records. Nothing in
//! here performs I/O or keeps state between calls.

pub mod daily;
pub mod department;
pub mod directory;
pub mod hours;
pub mod overview;
pub mod payroll;
pub mod performance;
pub mod recent;
pub mod status;

pub use daily::*;
pub use department::*;
pub use directory::*;
pub use hours::*;
pub use overview::*;
pub use payroll::*;
pub use performance::*;
pub use recent::*;
pub use status::*;
