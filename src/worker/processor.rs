use crate::{
    common::{event::LedgerCommand, money::Money, status::OperationStatus},
    domain::ledger::{AccountId, FIRST_ACCOUNT_ID, Ledger},
};

/// Result of one processed command, ready for the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub op: &'static str,
    /// For creates, the id inferred from creation order; `None` when rejected.
    pub account: Option<AccountId>,
    pub amount: Option<Money>,
    pub status: OperationStatus,
    /// Balance after the command, `None` when the account does not exist.
    pub balance: Option<Money>,
}

/// Dispatches commands to a [`Ledger`].
///
/// `create_account` does not hand back the new id, so the processor tracks the
/// id the next successful create will get, counting from 1 like the ledger.
/// Feed a processor only one ledger, starting from empty.
#[derive(Debug)]
pub struct Processor {
    next_account: AccountId,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self {
            next_account: FIRST_ACCOUNT_ID,
        }
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: LedgerCommand) -> Outcome {
        let op = command.op_name();
        let outcome = match command {
            LedgerCommand::CreateAccount { initial_balance } => {
                let status = ledger.create_account(initial_balance);
                let account = if status.is_success() {
                    let id = self.next_account;
                    self.next_account += 1;
                    Some(id)
                } else {
                    None
                };
                Outcome {
                    op,
                    account,
                    amount: Some(initial_balance),
                    status,
                    balance: account.and_then(|id| ledger.balance(id)),
                }
            }
            LedgerCommand::Deposit { account, amount } => Outcome {
                op,
                account: Some(account),
                amount: Some(amount),
                status: ledger.deposit(account, amount),
                balance: ledger.balance(account),
            },
            LedgerCommand::Withdraw { account, amount } => Outcome {
                op,
                account: Some(account),
                amount: Some(amount),
                status: ledger.withdraw(account, amount),
                balance: ledger.balance(account),
            },
            LedgerCommand::CheckBalance { account } => {
                let balance = ledger.balance(account);
                Outcome {
                    op,
                    account: Some(account),
                    amount: None,
                    status: match balance {
                        Some(_) => OperationStatus::Success,
                        None => OperationStatus::AccountNotFound,
                    },
                    balance,
                }
            }
        };

        tracing::debug!(
            op = outcome.op,
            account = ?outcome.account,
            amount = ?outcome.amount.map(|m| m.as_i64()),
            status = %outcome.status,
            "processed command"
        );
        outcome
    }
}
