//! Pool accounting: who has entered and how much the pool holds.

use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::error::LotteryError;
use crate::state::{DrawPhase, Lottery};

/// Read-only view of the active pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub entries: Vec<Pubkey>,
    pub pot: u64,
}

impl Lottery {
    /// Total lamports held for the active pool.
    pub fn pot(&self) -> Result<u64> {
        pot_for(self.stake_unit, self.players.len())
    }

    /// Records one entry for `participant` and returns the new pot.
    ///
    /// Nothing is recorded unless every check passes.
    pub fn enter(&mut self, participant: Pubkey, amount: u64) -> Result<u64> {
        require!(amount == self.stake_unit, LotteryError::InvalidStake);
        require!(self.players.len() < MAX_PLAYERS, LotteryError::PoolFull);
        if self.lock_entries_during_draw {
            require!(
                self.phase() == DrawPhase::Idle,
                LotteryError::DrawInProgress
            );
        }

        let pot = pot_for(self.stake_unit, self.players.len() + 1)?;
        self.players.push(participant);
        Ok(pot)
    }

    pub fn snapshot(&self) -> Result<PoolSnapshot> {
        Ok(PoolSnapshot {
            entries: self.players.clone(),
            pot: self.pot()?,
        })
    }

    /// Empties the pool. Only called once a payout has gone through.
    pub(crate) fn clear(&mut self) {
        self.players.clear();
    }
}

pub(crate) fn pot_for(stake_unit: u64, entries: usize) -> Result<u64> {
    let entries = u64::try_from(entries).map_err(|_| error!(LotteryError::MathOverflow))?;
    stake_unit
        .checked_mul(entries)
        .ok_or_else(|| error!(LotteryError::MathOverflow))
}
