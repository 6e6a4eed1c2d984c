use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::types::{MinorUnits, TotalUnits};

/// One period of an amortization schedule. All amounts are in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 0 is the origination state, before any payment
    pub payment_number: u32,
    /// Remaining principal after this period's payment
    pub balance: MinorUnits,
    pub payment_amount: MinorUnits,
    pub interest_portion: MinorUnits,
    pub cumulative_payments: TotalUnits,
    pub cumulative_interest: TotalUnits,
}

impl ScheduleRow {
    /// Principal retired by this period's payment.
    pub fn principal_portion(&self) -> MinorUnits {
        self.payment_amount - self.interest_portion
    }
}

/// Lazy amortization schedule.
///
/// Yields the origination row first, then one row per payment until the
/// balance reaches zero. At most `term_months + 1` payments are generated;
/// the extra period absorbs rounding residue left by the fixed payment, and
/// the last allowed period always settles the full payoff amount.
#[derive(Debug, Clone)]
pub struct Schedule {
    balance: MinorUnits,
    monthly_rate: f64,
    fixed_payment: MinorUnits,
    max_payments: u32,
    next_payment: u32,
    cumulative_payments: TotalUnits,
    cumulative_interest: TotalUnits,
}

impl Schedule {
    /// Build a schedule from raw parameters. `monthly_rate` is a decimal
    /// fraction (annual percentage / 1200).
    pub fn new(
        principal: MinorUnits,
        monthly_rate: f64,
        fixed_payment: MinorUnits,
        term_months: u32,
    ) -> Self {
        Schedule {
            balance: principal,
            monthly_rate,
            fixed_payment,
            max_payments: term_months.saturating_add(1),
            next_payment: 0,
            cumulative_payments: 0,
            cumulative_interest: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.next_payment > 0 && (self.balance <= 0 || self.next_payment > self.max_payments)
    }

    fn origination(&mut self) -> ScheduleRow {
        self.next_payment = 1;
        ScheduleRow {
            payment_number: 0,
            balance: self.balance,
            payment_amount: 0,
            interest_portion: 0,
            cumulative_payments: 0,
            cumulative_interest: 0,
        }
    }

    fn advance(&mut self) -> ScheduleRow {
        let interest = (self.balance as f64 * self.monthly_rate).round() as MinorUnits;
        let payoff = self.balance + interest;

        let payment = if self.next_payment == self.max_payments {
            payoff
        } else {
            self.fixed_payment.min(payoff)
        };

        self.balance -= payment - interest;
        self.cumulative_payments += TotalUnits::from(payment);
        self.cumulative_interest += TotalUnits::from(interest);

        let row = ScheduleRow {
            payment_number: self.next_payment,
            balance: self.balance,
            payment_amount: payment,
            interest_portion: interest,
            cumulative_payments: self.cumulative_payments,
            cumulative_interest: self.cumulative_interest,
        };
        self.next_payment += 1;
        row
    }
}

impl Iterator for Schedule {
    type Item = ScheduleRow;

    fn next(&mut self) -> Option<ScheduleRow> {
        if self.next_payment == 0 {
            return Some(self.origination());
        }
        if self.is_exhausted() {
            return None;
        }
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next_payment == 0 {
            return (1, Some(self.max_payments as usize + 1));
        }
        if self.is_exhausted() {
            return (0, Some(0));
        }
        (1, Some((self.max_payments - self.next_payment) as usize + 1))
    }
}

impl FusedIterator for Schedule {}
