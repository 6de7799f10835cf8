//! Command implementations

mod legality;
mod legalize;
#[cfg(feature = "server")]
mod serve;

pub use legality::legality;
pub use legalize::legalize;
#[cfg(feature = "server")]
pub use serve::serve;
