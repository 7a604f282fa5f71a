use std::collections::HashMap;

use crate::{
    common::{money::Money, status::OperationStatus},
    domain::account::Account,
};

pub type AccountId = u64;

/// Id given to the first account of an empty ledger.
pub const FIRST_ACCOUNT_ID: AccountId = 1;

/// Returned by [`Ledger::check_balance`] for an unknown account.
pub const NOT_FOUND_BALANCE: i64 = -1;

/// In-memory ledger of accounts keyed by sequentially assigned ids.
///
/// Every operation validates first and mutates second, so a call that does not
/// return [`OperationStatus::Success`] leaves the ledger exactly as it was.
///
/// # Examples
/// ```
/// use account_ledger::common::{money::Money, status::OperationStatus};
/// use account_ledger::domain::ledger::Ledger;
///
/// let mut ledger = Ledger::new();
/// assert_eq!(ledger.create_account(Money::new(100)), OperationStatus::Success);
/// assert_eq!(ledger.withdraw(1, Money::new(200)), OperationStatus::InsufficientFunds);
/// assert_eq!(ledger.check_balance(1), 100);
/// assert_eq!(ledger.check_balance(2), -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub(crate) accounts: HashMap<AccountId, Account>,
    pub(crate) next_id: AccountId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            next_id: FIRST_ACCOUNT_ID,
        }
    }

    /// Opens an account holding `initial_balance` under the next free id.
    ///
    /// The assigned id is not returned; ids start at 1 and follow creation order.
    pub fn create_account(&mut self, initial_balance: Money) -> OperationStatus {
        if initial_balance.is_negative() {
            return OperationStatus::InvalidInput;
        }
        let Some(following) = self.next_id.checked_add(1) else {
            return OperationStatus::InvalidInput;
        };

        self.accounts
            .insert(self.next_id, Account::new(initial_balance));
        self.next_id = following;
        OperationStatus::Success
    }

    /// Credits `amount` to the account. A credit that would overflow the
    /// balance is rejected as `InvalidInput`.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> OperationStatus {
        if !amount.is_positive() {
            return OperationStatus::InvalidInput;
        }
        let Some(acc) = self.accounts.get_mut(&account_id) else {
            return OperationStatus::AccountNotFound;
        };

        if acc.credit(amount) {
            OperationStatus::Success
        } else {
            OperationStatus::InvalidInput
        }
    }

    pub fn withdraw(&mut self, account_id: AccountId, amount: Money) -> OperationStatus {
        if !amount.is_positive() {
            return OperationStatus::InvalidInput;
        }
        let Some(acc) = self.accounts.get_mut(&account_id) else {
            return OperationStatus::AccountNotFound;
        };
        if !acc.can_cover(amount) {
            return OperationStatus::InsufficientFunds;
        }

        acc.debit(amount);
        OperationStatus::Success
    }

    pub fn balance(&self, account_id: AccountId) -> Option<Money> {
        self.accounts.get(&account_id).map(Account::balance)
    }

    /// Balance as a plain integer, [`NOT_FOUND_BALANCE`] when the account does
    /// not exist. Prefer [`Ledger::balance`] in new code.
    pub fn check_balance(&self, account_id: AccountId) -> i64 {
        self.balance(account_id)
            .map_or(NOT_FOUND_BALANCE, |b| b.as_i64())
    }
}
