//! # Budget Ledger Contract
//!
//! A Soroban smart contract for governing departmental budgets. A single admin
//! sets an overall spending ceiling and approves proposals submitted by anyone;
//! each approval becomes the authoritative allocation for its department.
//!
//! ## Features
//!
//! - **Open Proposals**: Any caller may propose a positive amount for a department
//! - **Gated Approval**: Only the admin approves, and only `Pending` proposals
//! - **Last Approval Wins**: A department's budget is the most recently approved proposal
//! - **All-or-Nothing Calls**: Every check runs before any write; failed calls leave no state
//! - **Event Emission**: Tracks initialization, ceiling changes, proposals and approvals
//!
//! The total budget is an advisory ceiling. It accepts any value and is never
//! checked against approved allocations.

#![no_std]

mod types;
mod validation;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub use crate::types::{DataKey, DepartmentBudget, LedgerEvents, Proposal, ProposalStatus};
use crate::validation::validate_proposal_amount;

/// Error codes for the budget ledger contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BudgetLedgerError {
    /// Caller is not the admin
    Unauthorized = 1,
    /// Proposed amount is zero or negative
    InvalidAmount = 2,
    /// Contract not initialized
    NotInitialized = 3,
    /// No proposal with the given id
    ProposalNotFound = 4,
    /// Proposal is no longer pending
    AlreadyApproved = 5,
    /// Contract already initialized
    AlreadyInitialized = 6,
}

#[contract]
pub struct BudgetLedgerContract;

#[contractimpl]
impl BudgetLedgerContract {
    /// Initializes the ledger with its admin address.
    ///
    /// The admin cannot be changed afterwards.
    pub fn initialize(env: Env, admin: Address) -> Result<(), BudgetLedgerError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(BudgetLedgerError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::TotalBudget, &0i128);
        env.storage().instance().set(&DataKey::ProposalCounter, &0u64);

        LedgerEvents::initialized(&env, &admin);
        Ok(())
    }

    /// Overwrites the total budget ceiling.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `caller` - The address calling this function (must be admin)
    /// * `amount` - The new ceiling, stored as given
    ///
    /// # Errors
    /// * `NotInitialized` - If no admin has been set
    /// * `Unauthorized` - If caller is not admin
    pub fn set_total_budget(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), BudgetLedgerError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&DataKey::TotalBudget, &amount);

        LedgerEvents::total_budget_set(&env, &caller, amount);
        Ok(())
    }

    /// Submits a budget proposal for a department.
    ///
    /// Anyone may propose. Several pending proposals for the same department
    /// may coexist.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `caller` - The proposer, recorded on the proposal
    /// * `department` - Department name, taken as given
    /// * `amount` - Requested amount, must be positive
    ///
    /// # Returns
    /// * `u64` - The id assigned to the new proposal
    ///
    /// # Errors
    /// * `NotInitialized` - If no admin has been set
    /// * `InvalidAmount` - If amount is zero or negative
    pub fn propose_budget(
        env: Env,
        caller: Address,
        department: String,
        amount: i128,
    ) -> Result<u64, BudgetLedgerError> {
        caller.require_auth();
        Self::load_admin(&env)?;
        validate_proposal_amount(amount)?;

        let proposal_id = Self::get_proposal_count(env.clone()) + 1;

        let proposal = Proposal {
            id: proposal_id,
            department,
            amount,
            proposer: caller,
            status: ProposalStatus::Pending,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal_id), &proposal);
        env.storage()
            .instance()
            .set(&DataKey::ProposalCounter, &proposal_id);

        LedgerEvents::proposal_created(&env, &proposal);
        Ok(proposal_id)
    }

    /// Approves a pending proposal and makes its amount the department's budget.
    ///
    /// Any earlier allocation for the same department is replaced.
    ///
    /// # Errors
    /// * `NotInitialized` - If no admin has been set
    /// * `Unauthorized` - If caller is not admin
    /// * `ProposalNotFound` - If no proposal has this id
    /// * `AlreadyApproved` - If the proposal is not pending
    pub fn approve_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<(), BudgetLedgerError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut proposal: Proposal = env
            .storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(BudgetLedgerError::ProposalNotFound)?;

        if proposal.status != ProposalStatus::Pending {
            return Err(BudgetLedgerError::AlreadyApproved);
        }

        proposal.status = ProposalStatus::Approved;
        let budget = DepartmentBudget {
            amount: proposal.amount,
            approved: true,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal_id), &proposal);
        env.storage().persistent().set(
            &DataKey::DepartmentBudget(proposal.department.clone()),
            &budget,
        );

        LedgerEvents::proposal_approved(&env, &proposal);
        Ok(())
    }

    /// Returns the approved budget for a department, or an unallocated
    /// record if none has been approved.
    pub fn get_department_budget(env: Env, department: String) -> DepartmentBudget {
        env.storage()
            .persistent()
            .get(&DataKey::DepartmentBudget(department))
            .unwrap_or_else(DepartmentBudget::unallocated)
    }

    /// Returns the total budget ceiling, 0 if never set.
    pub fn get_total_budget(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalBudget)
            .unwrap_or(0)
    }

    /// Retrieves a proposal by id.
    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
    }

    /// Returns the id of the most recent proposal, 0 if none exist.
    pub fn get_proposal_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCounter)
            .unwrap_or(0)
    }

    /// Returns the admin address.
    pub fn get_admin(env: Env) -> Result<Address, BudgetLedgerError> {
        Self::load_admin(&env)
    }

    fn load_admin(env: &Env) -> Result<Address, BudgetLedgerError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(BudgetLedgerError::NotInitialized)
    }

    // Internal helper to verify admin
    fn require_admin(env: &Env, caller: &Address) -> Result<(), BudgetLedgerError> {
        let admin = Self::load_admin(env)?;
        if *caller != admin {
            return Err(BudgetLedgerError::Unauthorized);
        }
        Ok(())
    }
}
