use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::RandomWordsRequested;
use crate::oracle;
use crate::state::Lottery;

/// Accounts required to start a draw.
///
/// Ensures:
/// 1. Only the manager can start a draw.
/// 2. The pool is not empty and no other draw is outstanding.
/// 3. The randomness account was committed in the previous slot.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// The manager. Anyone else is rejected.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard.
    /// CHECK: Owner and data are validated in `oracle::request_randomness`.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.payer.key();
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();
    let lottery = &mut ctx.accounts.lottery;

    let issued = lottery.begin_draw(&caller, |lottery| {
        oracle::request_randomness(&lottery.oracle, &randomness_info, &clock, lottery.request_nonce)
    })?;

    msg!("Entries: {}", lottery.players.len());
    msg!("Randomness account: {}", issued.randomness_account);

    let config = lottery.oracle;
    emit!(RandomWordsRequested {
        request_id: issued.id,
        randomness_account: issued.randomness_account,
        subscription_id: config.subscription_id,
        key_hash: config.key_hash,
        request_confirmations: config.request_confirmations,
        callback_gas_limit: config.callback_gas_limit,
        num_words: config.num_words,
        requested_slot: issued.requested_slot,
    });

    Ok(())
}
