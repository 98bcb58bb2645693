use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Lottery, RequestId};

/// Read-only access to the lottery state. Values are returned through
/// instruction return data, so clients can simulate these instead of
/// decoding the account themselves.
#[derive(Accounts)]
pub struct Query<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_get_players(ctx: Context<Query>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players.clone())
}

pub fn process_get_manager(ctx: Context<Query>) -> Result<Pubkey> {
    Ok(ctx.accounts.lottery.manager)
}

pub fn process_get_last_request_id(ctx: Context<Query>) -> Result<RequestId> {
    Ok(ctx.accounts.lottery.last_request_id)
}

pub fn process_is_valid_request(ctx: Context<Query>, request_id: RequestId) -> Result<bool> {
    Ok(ctx.accounts.lottery.is_valid_request(&request_id))
}

pub fn process_get_subscription_id(ctx: Context<Query>) -> Result<u64> {
    Ok(ctx.accounts.lottery.oracle.subscription_id)
}

/// Ledger pot: `stake_unit` times the number of entries. The balance is not read.
pub fn process_get_pot(ctx: Context<Query>) -> Result<u64> {
    ctx.accounts.lottery.pot()
}
