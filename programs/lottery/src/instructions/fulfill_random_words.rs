use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::WinnerPicked;
use crate::oracle;
use crate::payout;
use crate::state::{Lottery, RequestId};

/// Accounts required to settle an outstanding draw.
///
/// This is the oracle callback. It can arrive at any time after `pick_winner`
/// and is checked only against the stored request:
/// 1. `request_id` must be the outstanding, still valid request.
/// 2. The randomness account must be the one bound to that request.
/// 3. The Switchboard value must be revealed in this slot.
///
/// The winner's account must be passed in `remaining_accounts`, writable.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// Account paying for the transaction. Any crank may settle.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: Owner and data are validated in `oracle::fulfilled_words`.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_fulfill_random_words<'info>(
    ctx: Context<'_, '_, '_, 'info, FulfillRandomWords<'info>>,
    request_id: RequestId,
) -> Result<()> {
    let clock = Clock::get()?;
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(lottery_info.data_len());
    let remaining_accounts = ctx.remaining_accounts;
    let lottery = &mut ctx.accounts.lottery;

    lottery.check_fulfillment(&request_id, randomness_info.key)?;
    let random_words = oracle::fulfilled_words(
        &lottery.oracle,
        &randomness_info,
        &clock,
        &lottery.pending,
    )?;

    let payout = lottery.fulfill(&request_id, &random_words, |winner, amount| {
        payout::pay_winner(
            &lottery_info,
            remaining_accounts,
            &winner,
            amount,
            rent_floor,
        )
    })?;

    msg!("Winner: {}", payout.winner);
    msg!("Paid out: {}", payout.amount);

    emit!(WinnerPicked {
        request_id,
        winner: payout.winner,
        winner_index: payout.winner_index,
        amount: payout.amount,
        round: lottery.draws_completed,
    });

    Ok(())
}
