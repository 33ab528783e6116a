use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::canonical_name;

/// A group participant.
///
/// `id` is the stable identity every balance and settlement structure keys
/// on; `name` is purely presentational. Matching against a display name (the
/// "is this balance mine?" check a client performs) goes through
/// [`Group::member_by_name`], which compares canonical forms.
///
/// [`Group::member_by_name`]: crate::Group::member_by_name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
}

impl Member {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    /// Canonical form of the display name used for uniqueness and lookups.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }
}
