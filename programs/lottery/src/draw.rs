//! Draw coordination: one outstanding randomness request at a time.
//!
//! ```text
//! Idle --pick_winner--> AwaitingRandomness --fulfill_random_words--> Idle
//! ```
//!
//! A fulfillment is accepted only for the id recorded by `begin_draw` and
//! only while that request is `Valid`. Settlement is two-phase. The request
//! is marked `Settling` before the payout, finalized to `Consumed` after it,
//! and put back to `Valid` if the payout fails.

use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::oracle::RandomnessRequest;
use crate::payout::{self, Payout};
use crate::state::{Lottery, PendingRequest, RequestId, RequestStatus};

impl Lottery {
    /// Starts a draw. `request` is only invoked once every precondition holds.
    pub fn begin_draw<F>(&mut self, caller: &Pubkey, request: F) -> Result<RandomnessRequest>
    where
        F: FnOnce(&Lottery) -> Result<RandomnessRequest>,
    {
        self.require_manager(caller)?;
        require!(!self.players.is_empty(), LotteryError::EmptyPool);
        require!(
            self.pending.status != RequestStatus::Valid,
            LotteryError::DrawInProgress
        );

        let issued = request(&*self)?;
        self.request_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or_else(|| error!(LotteryError::MathOverflow))?;
        self.pending = PendingRequest {
            id: issued.id,
            randomness_account: issued.randomness_account,
            seed_slot: issued.seed_slot,
            requested_slot: issued.requested_slot,
            status: RequestStatus::Valid,
        };
        self.last_request_id = issued.id;

        Ok(issued)
    }

    /// Rejects anything but the outstanding request, without touching state.
    pub fn check_fulfillment(
        &self,
        request_id: &RequestId,
        randomness_account: &Pubkey,
    ) -> Result<()> {
        if !self.is_valid_request(request_id) {
            msg!("No outstanding request matches the fulfillment");
            return err!(LotteryError::UnknownRequest);
        }
        require_keys_eq!(
            *randomness_account,
            self.pending.randomness_account,
            LotteryError::UnknownRequest
        );
        Ok(())
    }

    /// Settles the outstanding draw and resets the pool.
    pub fn fulfill<F>(
        &mut self,
        request_id: &RequestId,
        random_words: &[u64],
        transfer: F,
    ) -> Result<Payout>
    where
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        require!(
            self.is_valid_request(request_id),
            LotteryError::UnknownRequest
        );

        self.pending.status = RequestStatus::Settling;
        match payout::settle(&self.players, random_words, self.stake_unit, transfer) {
            Ok(payout) => {
                self.pending.status = RequestStatus::Consumed;
                self.clear();
                self.draws_completed = self.draws_completed.saturating_add(1);
                Ok(payout)
            }
            Err(e) => {
                self.pending.status = RequestStatus::Valid;
                Err(e)
            }
        }
    }
}
