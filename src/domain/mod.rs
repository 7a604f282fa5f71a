pub mod account;
#[cfg(any(test, feature = "test-harness"))]
pub mod harness;
pub mod ledger;
