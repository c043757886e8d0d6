mod decode;
mod encode;

pub use decode::{Decoded, decode_component};
pub use encode::{encode_component, encode_path, plain_path};
