use std::fmt;

use bytes::Bytes;
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Pseudo-random request body shared by every writer of a run.
///
/// Built once before any executor starts and never mutated afterwards;
/// cloning only bumps a reference count.
#[derive(Clone, PartialEq, Eq)]
pub struct PayloadBuffer {
    data: Bytes,
}

impl PayloadBuffer {
    #[must_use]
    pub fn random(len: usize) -> Self {
        let mut data = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut data);
        Self {
            data: Bytes::from(data),
        }
    }

    /// Reproducible buffer for a given seed.
    #[must_use]
    pub fn seeded(len: usize, seed: u64) -> Self {
        let mut data = vec![0u8; len];
        StdRng::seed_from_u64(seed).fill_bytes(&mut data);
        Self {
            data: Bytes::from(data),
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { data: Bytes::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Request body handle pointing at the shared bytes.
    #[must_use]
    pub fn body(&self) -> Bytes {
        self.data.clone()
    }
}

impl fmt::Debug for PayloadBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}
