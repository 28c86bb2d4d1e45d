use serde::{Deserialize, Serialize};

use crate::domain::types::{StaffId, StaffLevel};

/// The authenticated staff member on whose behalf a request runs.
///
/// Always passed explicitly into services; there is no ambient "current user".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffIdentity {
    pub id: StaffId,
    pub email: String,
    pub name: String,
    pub level: StaffLevel,
}

impl StaffIdentity {
    /// Returns `true` when the staff member holds at least `required` level.
    pub fn has_level(&self, required: StaffLevel) -> bool {
        self.level >= required
    }
}
