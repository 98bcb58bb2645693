use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::Lottery;

impl Lottery {
    /// Guard for privileged draw operations. Does not mutate state.
    pub fn require_manager(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.manager {
            msg!("Caller {} is not the manager", caller);
            return err!(LotteryError::Unauthorized);
        }
        Ok(())
    }
}
