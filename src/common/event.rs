use crate::{common::money::Money, domain::ledger::AccountId};

/// A ledger command sent from the reader to the worker for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerCommand {
    CreateAccount { initial_balance: Money },
    Deposit { account: AccountId, amount: Money },
    Withdraw { account: AccountId, amount: Money },
    CheckBalance { account: AccountId },
}

impl LedgerCommand {
    /// Name used for the `op` column on input and output.
    pub fn op_name(&self) -> &'static str {
        match self {
            LedgerCommand::CreateAccount { .. } => "create",
            LedgerCommand::Deposit { .. } => "deposit",
            LedgerCommand::Withdraw { .. } => "withdraw",
            LedgerCommand::CheckBalance { .. } => "balance",
        }
    }
}
