// Internal modules
pub(crate) mod codec;
mod header;
mod parsed;

// Public API exports
pub use header::{TokenHeader, TOKEN_TYPE};
pub use parsed::ParsedToken;
