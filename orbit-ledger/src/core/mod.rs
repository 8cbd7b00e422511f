pub mod ledger;
pub mod orbit;
