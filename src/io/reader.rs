use crate::{
    common::{event::LedgerCommand, money::Money},
    domain::ledger::AccountId,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. `account` is
/// blank for `create` rows and `amount` is blank for `balance` rows.
struct CsvRow {
    op: String,
    account: Option<AccountId>,
    amount: Option<String>,
}

impl CsvRow {
    fn require_account(&self, op: &str) -> Result<AccountId, String> {
        self.account
            .ok_or_else(|| format!("{op} missing account"))
    }

    fn require_amount(&self, op: &str) -> Result<Money, String> {
        let amt_str = self.amount.as_deref().ok_or_else(|| match self.account {
            Some(account) => format!("{op} missing amount for account {account}"),
            None => format!("{op} missing amount"),
        })?;
        Money::from_str(amt_str).map_err(|e| format!("{op}: {e}"))
    }
}

/// Reads and validates ledger commands from a CSV reader.
///
/// Supported headers: `op,account,amount`.
/// Normalizes `op` to lowercase; `create` needs an amount, `deposit` and
/// `withdraw` need both account and amount, `balance` needs an account.
///
/// # Examples
///
/// ```
/// use account_ledger::io::reader::read_commands;
/// use account_ledger::common::event::LedgerCommand;
/// use csv::ReaderBuilder;
///
/// let data = "op,account,amount\n\
/// create,,100\n\
/// deposit,1,50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(LedgerCommand::CreateAccount { .. })));
/// assert!(matches!(commands[1], Ok(LedgerCommand::Deposit { account: 1, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        match op.as_str() {
            "create" => Ok(LedgerCommand::CreateAccount {
                initial_balance: row.require_amount("create")?,
            }),
            "deposit" => Ok(LedgerCommand::Deposit {
                account: row.require_account("deposit")?,
                amount: row.require_amount("deposit")?,
            }),
            "withdraw" | "withdrawal" => Ok(LedgerCommand::Withdraw {
                account: row.require_account("withdraw")?,
                amount: row.require_amount("withdraw")?,
            }),
            "balance" => Ok(LedgerCommand::CheckBalance {
                account: row.require_account("balance")?,
            }),
            other => Err(match row.account {
                Some(account) => format!("unknown op: {other} for account {account}"),
                None => format!("unknown op: {other}"),
            }),
        }
    })
}
