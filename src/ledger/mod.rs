mod ledger_errors;
mod ledger_model;
mod ledger_repository;
mod ledger_service;
mod ledger_traits;

pub use ledger_errors::LedgerError;
pub use ledger_model::{
    CheckOutcome, EventContext, LedgerEntry, LedgerStatus, NewLedgerEntry, ProcessOutcome,
};
pub use ledger_repository::LedgerRepository;
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};

#[cfg(test)]
mod tests;
