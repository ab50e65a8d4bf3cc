use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::RngCore;
use rand::SeedableRng;

/// Random source with independent sub-streams for concurrent issuance.
///
/// A single root generator is seeded once from OS entropy. `split` derives a
/// child generator under a short-lived lock, so concurrent callers each draw
/// from their own stream instead of racing over shared generator state. The
/// 256-bit child seeds make stream collisions unobservable in practice.
pub struct SplittableRng {
    root: Mutex<StdRng>,
}

impl SplittableRng {
    /// Seed the root generator from the operating system entropy source.
    pub fn from_entropy() -> Self {
        Self {
            root: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed the root generator deterministically. Intended for tests.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            root: Mutex::new(StdRng::from_seed(seed)),
        }
    }

    /// Derive an independent child generator.
    pub fn split(&self) -> StdRng {
        let mut child_seed = [0u8; 32];
        {
            let mut root = self.root.lock().unwrap_or_else(|e| e.into_inner());
            root.fill_bytes(&mut child_seed);
        }
        StdRng::from_seed(child_seed)
    }

    /// Draw one 64-bit token seed from a fresh sub-stream.
    pub fn next_token_seed(&self) -> i64 {
        self.split().next_u64() as i64
    }
}
