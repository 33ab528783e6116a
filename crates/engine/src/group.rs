//! The `Group` holds the member roster and the expense ledger. It is the
//! in-memory form of whatever snapshot the host's store materializes; the
//! balance and transfer computations read it immutably.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    Currency, EngineError, Expense, Member, ResultEngine,
    util::{canonical_name, normalize_optional_text, normalize_required_name},
};

/// Parameters for recording a new expense in a group.
#[derive(Clone, Debug, Default)]
pub struct NewExpense {
    pub amount_minor: i64,
    /// Must match the group currency when set; defaults to it when `None`.
    pub currency: Option<Currency>,
    pub paid_by: Uuid,
    pub split_between: Vec<Uuid>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

/// A named collection of members sharing expenses.
///
/// Member order is insertion order and drives every deterministic iteration
/// downstream (balance overview rows, creditor/debtor ordering in transfer
/// plans).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub currency: Currency,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
}

impl Group {
    pub fn new(name: &str, currency: Currency) -> ResultEngine<Self> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: normalize_required_name(name, "group")?,
            currency,
            members: Vec::new(),
            expenses: Vec::new(),
        })
    }

    /// Adds a member, rejecting names that collide with an existing member
    /// under canonical comparison. Two members must never share a display
    /// name or their balances would merge at the presentation boundary.
    pub fn add_member(&mut self, name: &str) -> ResultEngine<Uuid> {
        let name = normalize_required_name(name, "member")?;
        let canonical = canonical_name(&name);
        if self
            .members
            .iter()
            .any(|member| member.canonical_name() == canonical)
        {
            return Err(EngineError::ExistingKey(name));
        }

        let member = Member::new(name);
        let member_id = member.id;
        self.members.push(member);
        debug!(group_id = %self.id, member_id = %member_id, "member added");
        Ok(member_id)
    }

    pub fn member(&self, member_id: Uuid) -> ResultEngine<&Member> {
        self.members
            .iter()
            .find(|member| member.id == member_id)
            .ok_or_else(|| EngineError::UnknownMember(member_id.to_string()))
    }

    /// Boundary shim for name-based matching ("is this balance mine?").
    ///
    /// Comparison is trimmed, NFKC-normalized and case-insensitive. Anything
    /// past this lookup keys on the stable member id.
    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        let canonical = canonical_name(name);
        self.members
            .iter()
            .find(|member| member.canonical_name() == canonical)
    }

    pub fn expense(&self, expense_id: Uuid) -> ResultEngine<&Expense> {
        self.expenses
            .iter()
            .find(|expense| expense.id == expense_id)
            .ok_or_else(|| EngineError::KeyNotFound(expense_id.to_string()))
    }

    fn expense_mut(&mut self, expense_id: Uuid) -> ResultEngine<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|expense| expense.id == expense_id)
            .ok_or_else(|| EngineError::KeyNotFound(expense_id.to_string()))
    }

    fn require_member(&self, member_id: Uuid, label: &str) -> ResultEngine<()> {
        if self.members.iter().any(|member| member.id == member_id) {
            Ok(())
        } else {
            Err(EngineError::UnknownMember(format!("{label}: {member_id}")))
        }
    }

    /// Records a validated expense in the ledger.
    ///
    /// Resolution is strict against the roster: an id outside
    /// `group.members` is rejected here and can therefore never accumulate a
    /// balance entry downstream.
    pub fn add_expense(&mut self, new: NewExpense) -> ResultEngine<Uuid> {
        if let Some(currency) = new.currency
            && currency != self.currency
        {
            return Err(EngineError::CurrencyMismatch(format!(
                "group currency is {}, got {}",
                self.currency.code(),
                currency.code()
            )));
        }
        self.require_member(new.paid_by, "payer")?;
        for participant in &new.split_between {
            self.require_member(*participant, "participant")?;
        }

        let expense = Expense::new(
            new.amount_minor,
            self.currency,
            new.paid_by,
            new.split_between,
            normalize_optional_text(new.category.as_deref()),
            normalize_optional_text(new.note.as_deref()),
            new.occurred_at.unwrap_or_else(Utc::now),
        )?;
        let expense_id = expense.id;
        debug!(
            group_id = %self.id,
            expense_id = %expense_id,
            amount_minor = expense.amount_minor,
            participants = expense.split_between.len(),
            "expense recorded"
        );
        self.expenses.push(expense);
        Ok(expense_id)
    }

    /// Flips one participant's settled flag on one expense and returns the
    /// new state.
    pub fn toggle_settled(&mut self, expense_id: Uuid, member_id: Uuid) -> ResultEngine<bool> {
        self.require_member(member_id, "member")?;
        let settled = self.expense_mut(expense_id)?.toggle_settled(member_id)?;
        debug!(
            group_id = %self.id,
            expense_id = %expense_id,
            member_id = %member_id,
            settled,
            "settlement toggled"
        );
        Ok(settled)
    }

    /// Marks every participant of one expense settled; returns how many
    /// flags flipped.
    pub fn settle_all(&mut self, expense_id: Uuid) -> ResultEngine<usize> {
        let flipped = self.expense_mut(expense_id)?.settle_all();
        info!(group_id = %self.id, expense_id = %expense_id, flipped, "expense fully settled");
        Ok(flipped)
    }

    /// Bulk-settles one member across every expense they participate in (the
    /// "settle up with X" action); returns how many flags flipped.
    pub fn settle_member(&mut self, member_id: Uuid) -> ResultEngine<usize> {
        self.require_member(member_id, "member")?;
        let mut flipped = 0;
        for expense in &mut self.expenses {
            if expense.is_participant(member_id) && expense.settled_by.insert(member_id) {
                flipped += 1;
            }
        }
        info!(group_id = %self.id, member_id = %member_id, flipped, "member settled up");
        Ok(flipped)
    }
}
