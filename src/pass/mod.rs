//! Password generation: length validation, character pools, sampling.

mod charset;
mod entropy;
mod generate;
mod length;

pub use charset::{CharClass, Selection, build_pool, pool_size};
pub use entropy::{entropy_bits, strength};
pub use generate::{generate, generate_password, generate_with};
pub use length::{MAX_LENGTH, MIN_LENGTH, validate_length};
