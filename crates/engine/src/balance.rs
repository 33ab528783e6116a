//! Net balance computation over a group snapshot.
//!
//! Pure read side: nothing here mutates the group, and the functions are safe
//! to re-run on every snapshot the host receives.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Group;

/// Presentation tolerance band in minor units: balances inside it render as
/// settled on a balance card.
///
/// The system this engine descends from kept floating-point balances and
/// compared them against a 0.01 currency-unit epsilon everywhere. Integer
/// minor units make the arithmetic exact, so the computations themselves
/// need no tolerance; the band survives only in [`Standing::classify`] so a
/// stray minor unit in a hand-built snapshot never renders as an
/// outstanding debt.
pub const EPSILON_MINOR: i64 = 1;

/// How a member's net position renders on a balance card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Balance above the tolerance band: the group owes this member.
    Owed,
    /// Balance below the band: this member owes the group.
    Owes,
    /// Within the band.
    Settled,
}

impl Standing {
    #[must_use]
    pub const fn classify(balance_minor: i64) -> Self {
        if balance_minor > EPSILON_MINOR {
            Standing::Owed
        } else if balance_minor < -EPSILON_MINOR {
            Standing::Owes
        } else {
            Standing::Settled
        }
    }
}

/// One roster-ordered row of a group's balance overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberBalance {
    pub member_id: Uuid,
    pub name: String,
    pub balance_minor: i64,
    pub standing: Standing,
}

/// Computes each roster member's signed net balance in minor units.
///
/// Positive means the member is owed money, negative means they owe. Every
/// roster member gets an entry, zero included; ids outside the roster never
/// do (expense recording already rejects them, and stale ids in a hand-built
/// snapshot are skipped rather than accumulated).
///
/// Per expense: the payer is credited the full amount, each participant is
/// debited their exact share, and a settled participant's share is reversed
/// on both sides so it nets to zero between payer and participant. The
/// returned balances always sum to exactly zero.
#[must_use]
pub fn compute_balances(group: &Group) -> HashMap<Uuid, i64> {
    let mut balances: HashMap<Uuid, i64> =
        group.members.iter().map(|member| (member.id, 0)).collect();

    for expense in &group.expenses {
        if let Some(balance) = balances.get_mut(&expense.paid_by) {
            *balance += expense.amount_minor;
        }
        for (participant, share) in expense.shares() {
            if expense.settled_by.contains(&participant) {
                // Paid back directly: the debit and the matching slice of the
                // payer's credit cancel, leaving only the payer's own books
                // to shrink.
                if let Some(balance) = balances.get_mut(&expense.paid_by) {
                    *balance -= share;
                }
            } else if let Some(balance) = balances.get_mut(&participant) {
                *balance -= share;
            }
        }
    }

    balances
}

/// Roster-ordered balance rows for the presentation layer, with the epsilon
/// classification already applied.
#[must_use]
pub fn balance_overview(group: &Group) -> Vec<MemberBalance> {
    let balances = compute_balances(group);
    group
        .members
        .iter()
        .map(|member| {
            let balance_minor = balances.get(&member.id).copied().unwrap_or(0);
            MemberBalance {
                member_id: member.id,
                name: member.name.clone(),
                balance_minor,
                standing: Standing::classify(balance_minor),
            }
        })
        .collect()
}
