pub mod base64url;
pub(crate) mod time;

pub use base64url::{decode, decode_bytes, encode, encode_bytes};
pub use time::now_millis;
