use std::io::Write;

use crate::{
    common::status::OperationStatus, domain::ledger::AccountId, worker::processor::Outcome,
};

const HEADERS: [&str; 5] = ["op", "account", "amount", "status", "balance"];

#[derive(serde::Serialize)]
/// Internal CSV output row representation.
///
/// Headers written (in this order): `op,account,amount,status,balance`.
/// Absent values are written as empty fields.
struct OutputRow {
    op: &'static str,
    account: Option<AccountId>,
    amount: Option<i64>,
    status: OperationStatus,
    balance: Option<i64>,
}

impl From<&Outcome> for OutputRow {
    fn from(outcome: &Outcome) -> Self {
        Self {
            op: outcome.op,
            account: outcome.account,
            amount: outcome.amount.map(|m| m.as_i64()),
            status: outcome.status,
            balance: outcome.balance.map(|m| m.as_i64()),
        }
    }
}

/// Writes one CSV row per outcome, in the order given, after a header row.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use account_ledger::common::{event::LedgerCommand, money::Money};
/// use account_ledger::domain::ledger::Ledger;
/// use account_ledger::io::writer::write_outcomes;
/// use account_ledger::worker::processor::Processor;
///
/// let mut ledger = Ledger::new();
/// let mut processor = Processor::new();
/// let outcome = processor.process(
///     &mut ledger,
///     LedgerCommand::CreateAccount { initial_balance: Money::new(100) },
/// );
///
/// let mut out = Vec::new();
/// write_outcomes(&mut out, &[outcome]).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "op,account,amount,status,balance\ncreate,1,100,SUCCESS,100\n");
/// ```
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[Outcome]) -> Result<(), csv::Error> {
    // Header written by hand so an empty run still produces it.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADERS)?;

    for outcome in outcomes {
        wtr.serialize(OutputRow::from(outcome))?;
    }

    wtr.flush()?;
    Ok(())
}
