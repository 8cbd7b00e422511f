pub mod consensus;

pub use consensus::evaluator::{ConsensusEvaluator, GateVerdict, QuorumPolicy, DEFAULT_CONSENSUS_THRESHOLD};
pub use consensus::registry::ValidatorPool;
pub use consensus::validator::Validator;
