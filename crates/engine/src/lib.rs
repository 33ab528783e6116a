//! Quota's group balance and debt-settlement engine.
//!
//! The engine is a pure library: it owns no I/O and no persistence. A host
//! materializes a [`Group`] snapshot (roster + expense ledger), mutates it
//! through the validated write operations, and reads the results through
//! [`compute_balances`], [`balance_overview`] and [`minimal_transfers`].
//! The read side never mutates its input and is safe to re-run on every
//! snapshot the host receives.

pub use balance::{EPSILON_MINOR, MemberBalance, Standing, balance_overview, compute_balances};
pub use currency::Currency;
pub use error::EngineError;
pub use expense::Expense;
pub use group::{Group, NewExpense};
pub use member::Member;
pub use money::Money;
pub use settlement::{Transfer, minimal_transfers};

mod balance;
mod currency;
mod error;
mod expense;
mod group;
mod member;
mod money;
mod settlement;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
