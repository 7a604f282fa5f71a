use account_ledger::common::{money::Money, status::OperationStatus};
use account_ledger::domain::ledger::{Ledger, NOT_FOUND_BALANCE};
use proptest::prelude::*;

// Balances small enough that a deposit on top can never overflow.
const MAX_SEED: i64 = i64::MAX / 4;

fn ledger_with(balance: i64) -> Ledger {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger.create_account(Money::new(balance)),
        OperationStatus::Success
    );
    ledger
}

proptest! {
    #[test]
    fn create_with_non_negative_balance_is_readable(b in 0..=i64::MAX) {
        let mut ledger = Ledger::new();
        prop_assert_eq!(ledger.create_account(Money::new(b)), OperationStatus::Success);
        prop_assert_eq!(ledger.check_balance(1), b);
        prop_assert_eq!(ledger.balance(1), Some(Money::new(b)));
    }

    #[test]
    fn create_with_negative_balance_creates_nothing(b in i64::MIN..0) {
        let mut ledger = Ledger::new();
        prop_assert_eq!(ledger.create_account(Money::new(b)), OperationStatus::InvalidInput);
        prop_assert_eq!(ledger.check_balance(1), NOT_FOUND_BALANCE);
        prop_assert_eq!(ledger, Ledger::new());
    }

    #[test]
    fn deposit_adds_to_balance(b in 0..MAX_SEED, a in 1..MAX_SEED) {
        let mut ledger = ledger_with(b);
        prop_assert_eq!(ledger.deposit(1, Money::new(a)), OperationStatus::Success);
        prop_assert_eq!(ledger.check_balance(1), b + a);
    }

    #[test]
    fn non_positive_deposit_is_rejected(b in 0..MAX_SEED, a in i64::MIN..=0) {
        let mut ledger = ledger_with(b);
        let before = ledger.clone();
        prop_assert_eq!(ledger.deposit(1, Money::new(a)), OperationStatus::InvalidInput);
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn operations_on_missing_account(id in 2u64.., a in 1..MAX_SEED) {
        let mut ledger = ledger_with(100);
        let before = ledger.clone();
        prop_assert_eq!(ledger.deposit(id, Money::new(a)), OperationStatus::AccountNotFound);
        prop_assert_eq!(ledger.withdraw(id, Money::new(a)), OperationStatus::AccountNotFound);
        prop_assert_eq!(ledger.check_balance(id), NOT_FOUND_BALANCE);
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn withdraw_exact_balance_leaves_zero(b in 1..=i64::MAX) {
        let mut ledger = ledger_with(b);
        prop_assert_eq!(ledger.withdraw(1, Money::new(b)), OperationStatus::Success);
        prop_assert_eq!(ledger.check_balance(1), 0);
    }

    #[test]
    fn withdraw_one_over_balance_is_rejected(b in 0..MAX_SEED) {
        let mut ledger = ledger_with(b);
        let before = ledger.clone();
        prop_assert_eq!(ledger.withdraw(1, Money::new(b + 1)), OperationStatus::InsufficientFunds);
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn balance_never_goes_negative(
        seed in 0..1_000i64,
        ops in proptest::collection::vec((any::<bool>(), -50..500i64), 0..64),
    ) {
        let mut ledger = ledger_with(seed);
        for (is_deposit, amount) in ops {
            let before = ledger.clone();
            let status = if is_deposit {
                ledger.deposit(1, Money::new(amount))
            } else {
                ledger.withdraw(1, Money::new(amount))
            };
            if !status.is_success() {
                prop_assert_eq!(&ledger, &before);
            }
            prop_assert!(ledger.check_balance(1) >= 0);
        }
    }
}
