use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::ledger::pot_for;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub winner_index: u64,
    pub amount: u64,
}

/// Index of the winning entry: the first random word modulo the pool size.
pub fn winner_index(entries: usize, random_words: &[u64]) -> Result<usize> {
    require!(entries > 0, LotteryError::EmptyPool);
    let word = random_words
        .first()
        .ok_or_else(|| error!(LotteryError::MissingRandomWords))?;
    Ok((*word % entries as u64) as usize)
}

/// Picks the winner and pays them the whole pot through `transfer`.
///
/// Any transfer error surfaces as `TransferFailure`.
pub fn settle<F>(
    entries: &[Pubkey],
    random_words: &[u64],
    stake_unit: u64,
    transfer: F,
) -> Result<Payout>
where
    F: FnOnce(Pubkey, u64) -> Result<()>,
{
    let index = winner_index(entries.len(), random_words)?;
    let winner = entries[index];
    let amount = pot_for(stake_unit, entries.len())?;

    msg!("Randomness result: {}", random_words[0]);
    msg!("Winner: {} at index {}", winner, index);

    transfer(winner, amount).map_err(|e| {
        msg!("Payout of {} lamports to {} failed: {}", amount, winner, e);
        error!(LotteryError::TransferFailure)
    })?;

    Ok(Payout {
        winner,
        winner_index: index as u64,
        amount,
    })
}

/// Moves `amount` lamports out of a program-owned account, never dipping
/// below `rent_floor`.
pub fn transfer_lamports(
    from: &AccountInfo,
    to: &AccountInfo,
    amount: u64,
    rent_floor: u64,
) -> Result<()> {
    require!(to.is_writable, LotteryError::TransferFailure);
    require_keys_neq!(*from.key, *to.key, LotteryError::TransferFailure);

    let remaining = from
        .lamports()
        .checked_sub(amount)
        .ok_or_else(|| error!(LotteryError::TransferFailure))?;
    require!(remaining >= rent_floor, LotteryError::TransferFailure);
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or_else(|| error!(LotteryError::MathOverflow))?;

    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Looks up the winner among the accounts supplied with the fulfillment.
pub fn find_winner_account<'a, 'info>(
    accounts: &'a [AccountInfo<'info>],
    winner: &Pubkey,
) -> Result<&'a AccountInfo<'info>> {
    accounts
        .iter()
        .find(|account| account.key == winner)
        .ok_or_else(|| {
            msg!("Winner account {} not supplied", winner);
            error!(LotteryError::TransferFailure)
        })
}

/// Pays `amount` from the lottery account to the winner's supplied account.
pub fn pay_winner(
    lottery: &AccountInfo,
    accounts: &[AccountInfo],
    winner: &Pubkey,
    amount: u64,
    rent_floor: u64,
) -> Result<()> {
    let winner_info = find_winner_account(accounts, winner)?;
    transfer_lamports(lottery, winner_info, amount, rent_floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::RandomnessRequest;
    use crate::state::fixtures::{self, assert_lottery_err, STAKE};

    fn players(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn index_is_first_word_mod_len() {
        assert_eq!(winner_index(3, &[1]).unwrap(), 1);
        assert_eq!(winner_index(3, &[3]).unwrap(), 0);
        assert_eq!(winner_index(3, &[5, 0, 0]).unwrap(), 2);
        assert_eq!(winner_index(1, &[u64::MAX]).unwrap(), 0);
        assert_eq!(winner_index(7, &[u64::MAX]).unwrap(), (u64::MAX % 7) as usize);
    }

    #[test]
    fn index_needs_entries_and_words() {
        assert_lottery_err(winner_index(0, &[1]), LotteryError::EmptyPool);
        assert_lottery_err(winner_index(2, &[]), LotteryError::MissingRandomWords);
    }

    #[test]
    fn settle_pays_full_pot_to_selected_entry() {
        let entries = players(3);
        let mut paid = None;

        let payout = settle(&entries, &[1], STAKE, |winner, amount| {
            paid = Some((winner, amount));
            Ok(())
        })
        .unwrap();

        assert_eq!(payout.winner, entries[1]);
        assert_eq!(payout.winner_index, 1);
        assert_eq!(payout.amount, 3 * STAKE);
        assert_eq!(paid, Some((entries[1], 3 * STAKE)));
    }

    #[test]
    fn failed_transfer_is_reported_as_transfer_failure() {
        let entries = players(2);
        assert_lottery_err(
            settle(&entries, &[0], STAKE, |_, _| err!(LotteryError::MathOverflow)),
            LotteryError::TransferFailure,
        );
    }

    #[test]
    fn settle_without_words_never_transfers() {
        let entries = players(2);
        let mut called = false;
        let result = settle(&entries, &[], STAKE, |_, _| {
            called = true;
            Ok(())
        });
        assert_lottery_err(result, LotteryError::MissingRandomWords);
        assert!(!called);
    }

    #[test]
    fn lamports_move_and_conserve() {
        let owner = crate::ID;
        let (from_key, to_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut from_lamports, mut to_lamports) = (1_000 + 3 * STAKE, 500u64);
        let (mut from_data, mut to_data) = ([0u8; 8], [0u8; 0]);
        let system = Pubkey::default();
        let from = AccountInfo::new(
            &from_key,
            false,
            true,
            &mut from_lamports,
            &mut from_data,
            &owner,
            false,
            0,
        );
        let to = AccountInfo::new(
            &to_key,
            false,
            true,
            &mut to_lamports,
            &mut to_data,
            &system,
            false,
            0,
        );

        transfer_lamports(&from, &to, 3 * STAKE, 1_000).unwrap();

        assert_eq!(from.lamports(), 1_000);
        assert_eq!(to.lamports(), 500 + 3 * STAKE);
    }

    #[test]
    fn transfer_keeps_rent_reserve() {
        let owner = crate::ID;
        let (from_key, to_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut from_lamports, mut to_lamports) = (1_000 + STAKE, 0u64);
        let (mut from_data, mut to_data) = ([0u8; 8], [0u8; 0]);
        let system = Pubkey::default();
        let from = AccountInfo::new(
            &from_key,
            false,
            true,
            &mut from_lamports,
            &mut from_data,
            &owner,
            false,
            0,
        );
        let to = AccountInfo::new(
            &to_key,
            false,
            true,
            &mut to_lamports,
            &mut to_data,
            &system,
            false,
            0,
        );

        assert_lottery_err(
            transfer_lamports(&from, &to, 2 * STAKE, 1_000),
            LotteryError::TransferFailure,
        );
        assert_lottery_err(
            transfer_lamports(&from, &to, STAKE + 1, 1_000),
            LotteryError::TransferFailure,
        );
        assert_eq!(from.lamports(), 1_000 + STAKE);
        assert_eq!(to.lamports(), 0);
    }

    #[test]
    fn read_only_winner_cannot_be_paid() {
        let owner = crate::ID;
        let (from_key, to_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut from_lamports, mut to_lamports) = (STAKE, 0u64);
        let (mut from_data, mut to_data) = ([0u8; 8], [0u8; 0]);
        let system = Pubkey::default();
        let from = AccountInfo::new(
            &from_key,
            false,
            true,
            &mut from_lamports,
            &mut from_data,
            &owner,
            false,
            0,
        );
        let to = AccountInfo::new(
            &to_key,
            false,
            false,
            &mut to_lamports,
            &mut to_data,
            &system,
            false,
            0,
        );

        assert_lottery_err(
            transfer_lamports(&from, &to, STAKE, 0),
            LotteryError::TransferFailure,
        );
        assert_eq!(from.lamports(), STAKE);
    }

    #[test]
    fn winner_account_lookup() {
        let (winner, other) = (Pubkey::new_unique(), Pubkey::new_unique());
        let system = Pubkey::default();
        let (mut winner_lamports, mut other_lamports) = (0u64, 0u64);
        let (mut winner_data, mut other_data) = ([0u8; 0], [0u8; 0]);
        let other_info = AccountInfo::new(
            &other,
            false,
            true,
            &mut other_lamports,
            &mut other_data,
            &system,
            false,
            0,
        );
        let winner_info = AccountInfo::new(
            &winner,
            false,
            true,
            &mut winner_lamports,
            &mut winner_data,
            &system,
            false,
            0,
        );

        assert_lottery_err(
            find_winner_account(&[other_info.clone()], &winner).map(|_| ()),
            LotteryError::TransferFailure,
        );
        let accounts = [other_info, winner_info];
        assert_eq!(find_winner_account(&accounts, &winner).unwrap().key, &winner);
    }

    #[test]
    fn read_only_winner_account_fails_payout() {
        let owner = crate::ID;
        let (lottery_key, winner) = (Pubkey::new_unique(), Pubkey::new_unique());
        let system = Pubkey::default();
        let (mut lottery_lamports, mut winner_lamports) = (1_000 + STAKE, 0u64);
        let (mut lottery_data, mut winner_data) = ([0u8; 8], [0u8; 0]);
        let lottery_info = AccountInfo::new(
            &lottery_key,
            false,
            true,
            &mut lottery_lamports,
            &mut lottery_data,
            &owner,
            false,
            0,
        );
        let winner_info = AccountInfo::new(
            &winner,
            false,
            false,
            &mut winner_lamports,
            &mut winner_data,
            &system,
            false,
            0,
        );

        assert_lottery_err(
            pay_winner(&lottery_info, &[winner_info], &winner, STAKE, 1_000),
            LotteryError::TransferFailure,
        );
        assert_eq!(lottery_info.lamports(), 1_000 + STAKE);
    }

    #[test]
    fn fulfillment_pays_supplied_winner_and_drains_custody() {
        let rent_floor = 1_000u64;
        let manager = Pubkey::new_unique();
        let mut lottery = fixtures::lottery(manager);
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for p in &players {
            lottery.enter(*p, STAKE).unwrap();
        }
        let issued = lottery
            .begin_draw(&manager, |_| {
                Ok(RandomnessRequest {
                    id: [4u8; 32],
                    randomness_account: Pubkey::new_unique(),
                    seed_slot: 9,
                    requested_slot: 10,
                })
            })
            .unwrap();

        let owner = crate::ID;
        let system = Pubkey::default();
        let lottery_key = Pubkey::new_unique();
        let mut lottery_lamports = rent_floor + lottery.pot().unwrap();
        let mut lottery_data = [0u8; 8];
        let lottery_info = AccountInfo::new(
            &lottery_key,
            false,
            true,
            &mut lottery_lamports,
            &mut lottery_data,
            &owner,
            false,
            0,
        );
        let mut balances = [0u64; 3];
        let mut datas = [[0u8; 0]; 3];
        let mut infos = Vec::new();
        for ((key, lamports), data) in players
            .iter()
            .zip(balances.iter_mut())
            .zip(datas.iter_mut())
        {
            infos.push(AccountInfo::new(
                key, false, true, lamports, data, &system, false, 0,
            ));
        }
        assert_eq!(lottery_info.lamports() - rent_floor, lottery.pot().unwrap());

        // Entry 1 wins with word 1, but only entries 0 and 2 are supplied.
        let without_winner = [infos[0].clone(), infos[2].clone()];
        let failed = lottery.fulfill(&issued.id, &[1], |winner, amount| {
            pay_winner(&lottery_info, &without_winner, &winner, amount, rent_floor)
        });
        assert_lottery_err(failed, LotteryError::TransferFailure);
        assert!(lottery.is_valid_request(&issued.id));
        assert_eq!(lottery.players, players);
        assert_eq!(lottery_info.lamports(), rent_floor + 3 * STAKE);

        let payout = lottery
            .fulfill(&issued.id, &[1], |winner, amount| {
                pay_winner(&lottery_info, &infos, &winner, amount, rent_floor)
            })
            .unwrap();

        assert_eq!(payout.winner, players[1]);
        assert_eq!(infos[1].lamports(), 3 * STAKE);
        assert_eq!(infos[0].lamports(), 0);
        assert_eq!(infos[2].lamports(), 0);
        assert_eq!(lottery_info.lamports(), rent_floor);
        assert_eq!(lottery.pot().unwrap(), 0);
    }
}
