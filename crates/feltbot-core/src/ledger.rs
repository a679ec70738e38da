//! In-memory session earnings tracking.
//!
//! Deliberately not persisted: the balance is a per-session running total for
//! operator visibility, reset on every restart.

/// Running balance of income and fines observed this session.
#[derive(Debug, Default)]
pub struct SessionLedger {
    balance: i64,
    gains: u64,
    losses: u64,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one earning event. Positive amounts are payouts, negative are fines.
    pub fn record(&mut self, amount: i64) {
        self.balance += amount;
        if amount >= 0 {
            self.gains += amount as u64;
            tracing::info!("Gained ${amount} (session balance ${})", self.balance);
        } else {
            self.losses += amount.unsigned_abs();
            tracing::info!("Lost ${} (session balance ${})", -amount, self.balance);
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Total paid out this session, ignoring fines.
    pub fn gains(&self) -> u64 {
        self.gains
    }

    /// Total fined this session.
    pub fn losses(&self) -> u64 {
        self.losses
    }
}
