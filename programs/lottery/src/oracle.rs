//! Randomness oracle client backed by Switchboard On-Demand.
//!
//! A request is a Switchboard randomness account committed in the slot just
//! before `pick_winner`. It is fulfilled once the oracle has revealed the
//! value and a crank calls `fulfill_random_words` in the reveal slot. No
//! timeout exists. If the oracle never reveals, the lottery keeps waiting.

use anchor_lang::prelude::*;
use solana_program::hash::hashv;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{MAX_RANDOM_WORDS, REQUEST_ID_DOMAIN};
use crate::error::LotteryError;
use crate::state::{OracleConfig, PendingRequest, RequestId};

/// What `pick_winner` records as the outstanding request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    pub id: RequestId,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
    pub requested_slot: u64,
}

/// Commits to `randomness_account` as the source for the next draw.
pub fn request_randomness(
    config: &OracleConfig,
    randomness_account: &AccountInfo,
    clock: &Clock,
    nonce: u64,
) -> Result<RandomnessRequest> {
    check_owner(config, randomness_account)?;

    let randomness_data = RandomnessAccountData::parse(randomness_account.try_borrow_data()?)
        .map_err(|_| error!(LotteryError::InvalidRandomnessAccount))?;
    check_fresh_commit(randomness_data.seed_slot, clock.slot)?;

    Ok(RandomnessRequest {
        id: request_id_for(randomness_account.key, randomness_data.seed_slot, nonce),
        randomness_account: randomness_account.key(),
        seed_slot: randomness_data.seed_slot,
        requested_slot: clock.slot,
    })
}

/// Reads the revealed value for the outstanding request and expands it into
/// the configured number of words.
///
/// The account must still hold the commit recorded by `pick_winner`. A
/// re-committed account carries a reveal the draw never asked for.
pub fn fulfilled_words(
    config: &OracleConfig,
    randomness_account: &AccountInfo,
    clock: &Clock,
    pending: &PendingRequest,
) -> Result<Vec<u64>> {
    check_owner(config, randomness_account)?;
    if !confirmations_met(config, pending.requested_slot, clock.slot) {
        msg!(
            "Requested at slot {}, {} confirmations required, current slot {}",
            pending.requested_slot,
            config.request_confirmations,
            clock.slot
        );
        return err!(LotteryError::RandomnessNotResolved);
    }

    let randomness_data = RandomnessAccountData::parse(randomness_account.try_borrow_data()?)
        .map_err(|_| error!(LotteryError::InvalidRandomnessAccount))?;
    check_same_commit(pending.seed_slot, randomness_data.seed_slot)?;
    let revealed_random_value = randomness_data
        .get_value(clock)
        .map_err(|_| error!(LotteryError::RandomnessNotResolved))?;

    Ok(expand_words(&revealed_random_value, config.num_words))
}

pub fn request_id_for(randomness_account: &Pubkey, seed_slot: u64, nonce: u64) -> RequestId {
    hashv(&[
        REQUEST_ID_DOMAIN,
        randomness_account.as_ref(),
        &seed_slot.to_le_bytes(),
        &nonce.to_le_bytes(),
    ])
    .to_bytes()
}

/// Splits a 32-byte reveal into little-endian `u64` words.
pub fn expand_words(value: &[u8; 32], num_words: u32) -> Vec<u64> {
    let count = num_words.min(MAX_RANDOM_WORDS) as usize;
    value
        .chunks_exact(8)
        .take(count)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect()
}

pub fn confirmations_met(config: &OracleConfig, requested_slot: u64, slot: u64) -> bool {
    slot.saturating_sub(requested_slot) >= u64::from(config.request_confirmations)
}

/// The randomness must have been committed in the previous slot, so the
/// value cannot already be known when the draw starts.
fn check_fresh_commit(seed_slot: u64, slot: u64) -> Result<()> {
    if slot.checked_sub(1) != Some(seed_slot) {
        msg!("Seed slot: {}", seed_slot);
        msg!("Current slot: {}", slot);
        return err!(LotteryError::RandomnessAlreadyRevealed);
    }
    Ok(())
}

fn check_same_commit(committed_seed_slot: u64, seed_slot: u64) -> Result<()> {
    if seed_slot != committed_seed_slot {
        msg!("Committed seed slot: {}", committed_seed_slot);
        msg!("Account seed slot: {}", seed_slot);
        return err!(LotteryError::UnknownRequest);
    }
    Ok(())
}

fn check_owner(config: &OracleConfig, randomness_account: &AccountInfo) -> Result<()> {
    require_keys_eq!(
        *randomness_account.owner,
        config.randomness_program,
        LotteryError::InvalidRandomnessAccount
    );
    Ok(())
}
