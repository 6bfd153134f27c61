//! Credit metering for Prompt Studio.
//!
//! The engine renders prompts for free and never sees credits. Callers ask a
//! [`CreditPolicy`] what a request costs and charge a [`CreditLedger`] before
//! calling the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ledger;
mod plan;
mod policy;

pub use ledger::CreditLedger;
pub use plan::Plan;
pub use policy::CreditPolicy;
