//! Simulated validator-pool consensus.
//!
//! Each active validator independently runs a structural check on a
//! transaction; the evaluator admits the transaction when the fraction of
//! approving validators reaches the quorum threshold. There is no voting
//! protocol, no network and no fault tolerance: it is a gate, not agreement.

pub mod evaluator;
pub mod registry;
pub mod validator;
