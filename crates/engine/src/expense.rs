//! A shared cost event: one payer, an even split across a set of
//! participants, and per-participant settlement flags.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, EngineError, Money, ResultEngine};

/// One expense recorded in a group's ledger.
///
/// The amount divides evenly across `split_between`; `settled_by` marks the
/// participants who already paid the payer back directly, outside any
/// computed transfer plan.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    /// Strictly positive amount in minor units.
    pub amount_minor: i64,
    pub currency: Currency,
    /// The member who fronted the money. May or may not appear in
    /// `split_between`; when it does, the payer owes their own share like
    /// everyone else.
    pub paid_by: Uuid,
    /// Participants the cost divides across, duplicate-free and in insertion
    /// order. Order matters: remainder minor units go to the earliest
    /// participants.
    pub split_between: Vec<Uuid>,
    /// Subset of `split_between`. Starts empty; mutated only through the
    /// group's settlement operations.
    pub settled_by: HashSet<Uuid>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl Expense {
    /// Validates and builds a new expense with no settlements.
    ///
    /// Rejects non-positive amounts and empty or duplicate-bearing splits.
    /// Membership of payer/participants in a roster is the group's concern,
    /// checked in [`Group::add_expense`].
    ///
    /// [`Group::add_expense`]: crate::Group::add_expense
    pub fn new(
        amount_minor: i64,
        currency: Currency,
        paid_by: Uuid,
        split_between: Vec<Uuid>,
        category: Option<String>,
        note: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if amount_minor <= 0 {
            return Err(EngineError::InvalidAmount(
                "amount_minor must be > 0".to_string(),
            ));
        }
        if split_between.is_empty() {
            return Err(EngineError::InvalidSplit(
                "split_between must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(split_between.len());
        for participant in &split_between {
            if !seen.insert(*participant) {
                return Err(EngineError::InvalidSplit(format!(
                    "duplicate participant: {participant}"
                )));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            amount_minor,
            currency,
            paid_by,
            split_between,
            settled_by: HashSet::new(),
            category,
            note,
            occurred_at,
        })
    }

    /// Exact per-participant shares in `split_between` order.
    ///
    /// Largest-remainder allocation: the shares differ by at most one minor
    /// unit and always sum back to `amount_minor`.
    #[must_use]
    pub fn shares(&self) -> Vec<(Uuid, i64)> {
        self.split_between
            .iter()
            .copied()
            .zip(
                Money::new(self.amount_minor)
                    .split_even(self.split_between.len())
                    .into_iter()
                    .map(Money::minor),
            )
            .collect()
    }

    /// The share a given participant carries, `None` for non-participants.
    #[must_use]
    pub fn share_of(&self, member_id: Uuid) -> Option<i64> {
        self.shares()
            .into_iter()
            .find_map(|(participant, share)| (participant == member_id).then_some(share))
    }

    #[must_use]
    pub fn is_participant(&self, member_id: Uuid) -> bool {
        self.split_between.contains(&member_id)
    }

    #[must_use]
    pub fn is_settled_by(&self, member_id: Uuid) -> bool {
        self.settled_by.contains(&member_id)
    }

    /// Flips a participant's settled flag and returns the new state.
    pub(crate) fn toggle_settled(&mut self, member_id: Uuid) -> ResultEngine<bool> {
        if !self.is_participant(member_id) {
            return Err(EngineError::NotAParticipant(member_id.to_string()));
        }
        if self.settled_by.insert(member_id) {
            Ok(true)
        } else {
            self.settled_by.remove(&member_id);
            Ok(false)
        }
    }

    /// Marks every participant settled; returns how many flags flipped.
    pub(crate) fn settle_all(&mut self) -> usize {
        let mut flipped = 0;
        for participant in &self.split_between {
            if self.settled_by.insert(*participant) {
                flipped += 1;
            }
        }
        flipped
    }
}
