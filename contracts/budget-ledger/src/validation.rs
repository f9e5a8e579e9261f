//! Validation logic for proposal input.

use crate::BudgetLedgerError;

/// Validates a requested proposal amount.
///
/// # Returns
/// * `Ok(())` if the amount is strictly positive
/// * `Err(BudgetLedgerError::InvalidAmount)` otherwise
pub fn validate_proposal_amount(amount: i128) -> Result<(), BudgetLedgerError> {
    if !is_valid_amount(amount) {
        return Err(BudgetLedgerError::InvalidAmount);
    }
    Ok(())
}

/// Returns `true` if `amount` can be requested in a proposal.
fn is_valid_amount(amount: i128) -> bool {
    amount > 0
}
