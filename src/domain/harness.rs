//! Test-only access to ledger internals.
//!
//! Compiled for unit tests and for downstream test code that enables the
//! `test-harness` feature. Production callers only see [`Ledger`]'s own methods.

use std::collections::HashMap;

use crate::domain::{
    account::Account,
    ledger::{AccountId, FIRST_ACCOUNT_ID, Ledger},
};

pub trait LedgerHarness {
    /// Drops every account and restarts id assignment at 1.
    fn reset(&mut self);

    fn raw_accounts(&self) -> &HashMap<AccountId, Account>;

    /// Id the next successful `create_account` will assign.
    fn account_counter(&self) -> AccountId;
}

impl LedgerHarness for Ledger {
    fn reset(&mut self) {
        self.accounts.clear();
        self.next_id = FIRST_ACCOUNT_ID;
    }

    fn raw_accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    fn account_counter(&self) -> AccountId {
        self.next_id
    }
}
