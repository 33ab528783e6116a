//! Wire payloads shared between the engine host and its clients.
//!
//! These types deliberately do not depend on the `engine` crate: transports
//! and UIs evolve separately from the domain model, so the host maps between
//! the two at its boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

pub mod group {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupNew {
        pub name: String,
        pub currency: Option<Currency>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberNew {
        pub group_id: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberGet {
        /// Member id (UUID).
        ///
        /// This is serialized as a string in JSON.
        pub id: Uuid,
        pub name: String,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub group_id: String,
        /// Amount in minor units (cents); must be > 0.
        pub amount_minor: i64,
        pub paid_by: Uuid,
        pub split_between: Vec<Uuid>,
        pub category: Option<String>,
        pub note: Option<String>,
        /// Defaults to "now" on the server when absent.
        pub occurred_at: Option<DateTime<Utc>>,
    }

    /// Flips one participant's settled flag on one expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettleToggle {
        pub group_id: String,
        pub expense_id: Uuid,
        pub member_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseGet {
        pub id: Uuid,
        pub amount_minor: i64,
        pub currency: Currency,
        pub paid_by: Uuid,
        pub split_between: Vec<Uuid>,
        pub settled_by: Vec<Uuid>,
        pub category: Option<String>,
        pub note: Option<String>,
        pub occurred_at: DateTime<Utc>,
    }
}

pub mod balance {
    use super::*;

    /// Sign classification of a balance, banded by the engine's tolerance.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Standing {
        Owed,
        Owes,
        Settled,
    }

    impl Standing {
        /// Returns the canonical standing string used by clients for
        /// color-coding balance cards.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Owed => "owed",
                Self::Owes => "owes",
                Self::Settled => "settled",
            }
        }
    }

    /// One balance card: a member's net position in a group.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MemberBalanceGet {
        pub member_id: Uuid,
        pub name: String,
        /// Positive = owed money, negative = owes money.
        pub balance_minor: i64,
        pub standing: Standing,
    }
}

pub mod settlement {
    use super::*;

    /// One "from pays to" row of a group's settlement plan.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferGet {
        pub from: Uuid,
        pub to: Uuid,
        /// Display names resolved from the roster, so clients can render
        /// "X pays Y: amount" without a second lookup.
        pub from_name: String,
        pub to_name: String,
        pub amount_minor: i64,
    }
}
