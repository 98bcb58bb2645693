use anchor_lang::prelude::*;

/// Seed of the single lottery PDA. The account stores the pool and custodies
/// every staked lamport.
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Upper bound on entries per round. Keeps the account under the 10 KiB
/// allocation limit for CPI-created accounts.
#[constant]
pub const MAX_PLAYERS: usize = 256;

/// A Switchboard reveal is 32 bytes, so at most four `u64` words per request.
#[constant]
pub const MAX_RANDOM_WORDS: u32 = 4;

/// Domain tag mixed into every request id.
pub const REQUEST_ID_DOMAIN: &[u8] = b"lottery-randomness-request";

pub const DISCRIMINATOR_SIZE: usize = 8;
