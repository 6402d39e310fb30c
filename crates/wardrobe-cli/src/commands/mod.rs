//! Command implementations.

pub mod analyze;
pub mod outfits;
pub mod prompt;

pub use self::analyze::execute_analyze;
pub use self::outfits::execute_outfits;
pub use self::prompt::execute_prompt;
