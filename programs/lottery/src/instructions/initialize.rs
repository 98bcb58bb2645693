use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::LotteryInitialized;
use crate::state::{InitializeParams, Lottery};

/// Accounts required to create the lottery.
/// The payer becomes the manager for the lifetime of the program.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation. Becomes the manager.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account. Also holds every staked lamport.
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery with its stake unit, oracle configuration and entry
/// policy. None of these can change afterwards.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `params` - Stake unit, oracle request parameters and entry policy
pub fn process_initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let manager = ctx.accounts.payer.key();
    let lottery = Lottery::new(ctx.bumps.lottery, manager, &params)?;

    msg!("Manager: {}", manager);
    msg!("Stake unit: {}", lottery.stake_unit);
    msg!(
        "Lock entries during draw: {}",
        lottery.lock_entries_during_draw
    );

    emit!(LotteryInitialized {
        manager,
        stake_unit: lottery.stake_unit,
        subscription_id: lottery.oracle.subscription_id,
        lock_entries_during_draw: lottery.lock_entries_during_draw,
    });

    ctx.accounts.lottery.set_inner(lottery);
    Ok(())
}
