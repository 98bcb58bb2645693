//! Pooled-stake lottery.
//!
//! Players deposit a fixed stake with `enter`. The manager starts a draw with
//! `pick_winner`, which commits a Switchboard randomness account as the
//! single outstanding request. Once the oracle reveals, `fulfill_random_words`
//! settles the draw. It pays the whole pot to `players[word % len]` and empties
//! the pool.
//!
//! An outstanding request has no timeout. If the oracle never reveals, the
//! lottery stays in the awaiting state. Whether new entries are accepted
//! during that window is chosen at initialization with
//! `lock_entries_during_draw`.

use anchor_lang::prelude::*;
use instructions::*;
use state::{InitializeParams, RequestId};

pub mod access;
pub mod constants;
pub mod draw;
pub mod error;
pub mod events;
mod instructions;
pub mod ledger;
pub mod oracle;
pub mod payout;
pub mod state;

declare_id!("2PDSed8t7Zuyg4md8uC9BCwC52v1bws39LkfQmkzLnV7");

#[program]
pub mod pooled_lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        process_initialize(ctx, params)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn fulfill_random_words<'info>(
        ctx: Context<'_, '_, '_, 'info, FulfillRandomWords<'info>>,
        request_id: RequestId,
    ) -> Result<()> {
        process_fulfill_random_words(ctx, request_id)
    }

    pub fn get_players(ctx: Context<Query>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn get_manager(ctx: Context<Query>) -> Result<Pubkey> {
        process_get_manager(ctx)
    }

    pub fn get_last_request_id(ctx: Context<Query>) -> Result<RequestId> {
        process_get_last_request_id(ctx)
    }

    pub fn is_valid_request(ctx: Context<Query>, request_id: RequestId) -> Result<bool> {
        process_is_valid_request(ctx, request_id)
    }

    pub fn get_subscription_id(ctx: Context<Query>) -> Result<u64> {
        process_get_subscription_id(ctx)
    }

    pub fn get_pot(ctx: Context<Query>) -> Result<u64> {
        process_get_pot(ctx)
    }
}
