//! Password generation.

use log::debug;
use rand::Rng;

use super::charset::{Selection, build_pool};
use crate::error::GenerationError;

/// Sample `length` characters from `pool` using the thread-local RNG.
pub fn generate(pool: &str, length: usize) -> Result<String, GenerationError> {
    generate_with(&mut rand::rng(), pool, length)
}

/// Sample `length` characters uniformly, with replacement, from `pool`.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    pool: &str,
    length: usize,
) -> Result<String, GenerationError> {
    let chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    debug!("generating {} chars from a {}-char pool", length, chars.len());

    Ok((0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect())
}

/// Build the pool for `selection` and generate from it.
pub fn generate_password(selection: &Selection, length: usize) -> Result<String, GenerationError> {
    generate(&build_pool(selection), length)
}
