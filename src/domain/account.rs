use crate::common::money::Money;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    /// Never negative.
    pub(crate) balance: Money,
}

impl Account {
    pub fn new(balance: Money) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn can_cover(&self, amount: Money) -> bool {
        amount <= self.balance
    }

    /// Adds `amount`, leaving the balance untouched and returning `false` on overflow.
    pub(crate) fn credit(&mut self, amount: Money) -> bool {
        match self.balance.checked_add(amount) {
            Some(next) => {
                self.balance = next;
                true
            }
            None => false,
        }
    }

    /// Caller must check `can_cover` first.
    pub(crate) fn debit(&mut self, amount: Money) {
        debug_assert!(self.can_cover(amount));
        self.balance = Money::new(self.balance.as_i64() - amount.as_i64());
    }
}
