//! Data types, storage keys and events for the budget ledger.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Lifecycle status of a proposal. `Approved` is terminal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Approved,
}

/// A department's requested allocation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential id, starting at 1
    pub id: u64,
    /// Department the allocation is requested for
    pub department: String,
    /// Requested amount, always positive
    pub amount: i128,
    /// Address that submitted the proposal
    pub proposer: Address,
    pub status: ProposalStatus,
}

/// Currently approved allocation for a department.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepartmentBudget {
    pub amount: i128,
    pub approved: bool,
}

impl DepartmentBudget {
    /// Value reported for a department with no approved proposal.
    pub fn unallocated() -> Self {
        DepartmentBudget {
            amount: 0,
            approved: false,
        }
    }
}

/// Storage keys for the contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Admin address, written once at initialization
    Admin,
    /// Advisory spending ceiling
    TotalBudget,
    /// Id of the most recently created proposal
    ProposalCounter,
    /// Proposal by id
    Proposal(u64),
    /// Approved allocation by department name
    DepartmentBudget(String),
}

/// Events emitted by the budget ledger.
pub struct LedgerEvents;

impl LedgerEvents {
    /// Event emitted when the ledger is initialized with its admin.
    pub fn initialized(env: &Env, admin: &Address) {
        let topics = (symbol_short!("ledger"), symbol_short!("init"));
        env.events().publish(topics, admin.clone());
    }

    /// Event emitted when the admin sets the total budget ceiling.
    pub fn total_budget_set(env: &Env, admin: &Address, amount: i128) {
        let topics = (symbol_short!("budget"), symbol_short!("total"));
        env.events().publish(topics, (admin.clone(), amount));
    }

    /// Event emitted when a proposal is submitted.
    pub fn proposal_created(env: &Env, proposal: &Proposal) {
        let topics = (
            symbol_short!("proposal"),
            symbol_short!("created"),
            proposal.id,
        );
        env.events().publish(
            topics,
            (
                proposal.proposer.clone(),
                proposal.department.clone(),
                proposal.amount,
            ),
        );
    }

    /// Event emitted when a proposal is approved and its department budget written.
    pub fn proposal_approved(env: &Env, proposal: &Proposal) {
        let topics = (
            symbol_short!("proposal"),
            symbol_short!("approved"),
            proposal.id,
        );
        env.events()
            .publish(topics, (proposal.department.clone(), proposal.amount));
    }
}
