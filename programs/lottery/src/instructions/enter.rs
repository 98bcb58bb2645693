use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::events::PlayerEntered;
use crate::state::Lottery;

/// Accounts required to enter the pool.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The participant paying the stake.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Lottery state account tracking the current pool.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the pool once.
///
/// Steps performed:
/// 1. Record the entry (rejects a wrong amount, a full pool or a locked draw).
/// 2. Transfer exactly `amount` lamports from the payer into the lottery account.
///
/// Both happen or neither does.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `amount` - Lamports deposited; must equal the stake unit
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.payer.key();
    let pot = ctx.accounts.lottery.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    let entries = ctx.accounts.lottery.players.len() as u64;
    msg!("Player {} entered, pot: {}", player, pot);

    emit!(PlayerEntered {
        player,
        entries,
        pot,
    });

    Ok(())
}
