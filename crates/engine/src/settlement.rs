//! Transfer-plan construction: reduces a group's net balances to a small set
//! of pairwise payments.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Group, compute_balances};

/// A single "from pays to" step of a settlement plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Uuid,
    pub to: Uuid,
    pub amount_minor: i64,
}

struct OpenPosition {
    member: Uuid,
    remaining: i64,
}

/// Builds the transfer plan that zeroes out all group balances.
///
/// Greedy two-cursor matching over creditors and debtors taken in roster
/// order: each step moves `min(creditor.remaining, debtor.remaining)` from
/// the current debtor to the current creditor and advances whichever side
/// reached zero. The plan is deterministic for a given roster order and
/// emits at most `nonzero_members - 1` transfers.
///
/// Balances are exact integer minor units, so the partition compares against
/// zero rather than a drift tolerance, and applying the whole plan restores
/// every balance to exactly zero. Remainder minor units from uneven splits
/// surface here as 1-unit transfer components, not as stranded residue.
///
/// Greedy matching in roster order is an intentional simplicity tradeoff; it
/// is not a provably minimal-transfer-count solver (that problem is NP-hard
/// in general), but for a handful of members it produces a small plan.
///
/// A group with every balance at zero yields an empty plan; that is the
/// "fully settled" result, not an error.
#[must_use]
pub fn minimal_transfers(group: &Group) -> Vec<Transfer> {
    let balances = compute_balances(group);

    let mut creditors: Vec<OpenPosition> = Vec::new();
    let mut debtors: Vec<OpenPosition> = Vec::new();
    for member in &group.members {
        let balance = balances.get(&member.id).copied().unwrap_or(0);
        if balance > 0 {
            creditors.push(OpenPosition {
                member: member.id,
                remaining: balance,
            });
        } else if balance < 0 {
            debtors.push(OpenPosition {
                member: member.id,
                remaining: -balance,
            });
        }
    }

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < creditors.len() && j < debtors.len() {
        let amount = creditors[i].remaining.min(debtors[j].remaining);
        transfers.push(Transfer {
            from: debtors[j].member,
            to: creditors[i].member,
            amount_minor: amount,
        });
        creditors[i].remaining -= amount;
        debtors[j].remaining -= amount;
        // At least one side hits zero each round, so both cursors only ever
        // move forward.
        if creditors[i].remaining == 0 {
            i += 1;
        }
        if debtors[j].remaining == 0 {
            j += 1;
        }
    }

    transfers
}
