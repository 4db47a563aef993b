//! # Loan Statistics
//!
//! Pure aggregation over an in-memory sequence of loans already fetched
//! from storage. No side effects.

use crate::types::{Loan, LoanStatistics};

/// Computes loan counts by status.
///
/// ## Rules
/// - `total` = number of loans
/// - `returned` = loans with the `returned` flag set
/// - `pending` = `total - returned`
/// - Empty input yields all zeroes
///
/// Under the delete-on-return lifecycle every live loan has
/// `returned = false`, so `returned` is 0 for data coming out of the
/// store; the aggregator still counts the flag so the computation stays
/// correct should the lifecycle ever keep returned rows.
pub fn compute_loan_statistics(loans: &[Loan]) -> LoanStatistics {
    let total = loans.len();
    let returned = loans.iter().filter(|loan| loan.returned).count();

    LoanStatistics {
        total,
        returned,
        pending: total - returned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn loan(id: i64, returned: bool) -> Loan {
        Loan {
            id,
            book_id: 1,
            user_name: "Reader".to_string(),
            loan_date: Utc::now(),
            returned,
        }
    }

    #[test]
    fn test_empty_input_is_all_zeroes() {
        assert_eq!(compute_loan_statistics(&[]), LoanStatistics::default());
    }

    #[test]
    fn test_counts_by_returned_flag() {
        let loans = vec![
            loan(1, false),
            loan(2, true),
            loan(3, false),
            loan(4, true),
            loan(5, false),
        ];

        let stats = compute_loan_statistics(&loans);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.returned, 2);
        assert_eq!(stats.pending, 3);
    }

    #[test]
    fn test_all_pending() {
        let loans = vec![loan(1, false), loan(2, false)];
        let stats = compute_loan_statistics(&loans);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.returned, 0);
        assert_eq!(stats.pending, 2);
    }
}
