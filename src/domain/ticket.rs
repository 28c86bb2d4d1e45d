use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DepartmentId, TicketId, TypeConstraintError};

/// Ticket summary as exposed to staff in list views.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub ticket_number: i32,
    pub title: String,
    pub department_id: DepartmentId,
    pub priority: String,
    pub closed: bool,
    pub unread: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Optional constraints narrowing the staff ticket list.
///
/// Every field is independent and the present ones are conjoined. An absent
/// field never constrains the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Case-insensitive substring of the ticket title.
    pub title: Option<String>,
    pub department_id: Option<DepartmentId>,
    /// A department was requested that no ticket can belong to.
    pub unknown_department: bool,
    /// Restrict to closed tickets only.
    pub closed_only: bool,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title substring. Blank values leave the filter unconstrained.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into().trim().to_string();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    pub fn department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self.unknown_department = false;
        self
    }

    /// Constrains the list to a department that cannot exist, so nothing
    /// matches.
    pub fn unknown_department(mut self) -> Self {
        self.department_id = None;
        self.unknown_department = true;
        self
    }

    /// Returns `true` when no ticket can satisfy the filter.
    pub fn matches_nothing(&self) -> bool {
        self.unknown_department
    }

    pub fn closed_only(mut self, closed_only: bool) -> Self {
        self.closed_only = closed_only;
        self
    }

    /// `LIKE` pattern matching the title substring literally.
    ///
    /// `\`, `%` and `_` are escaped with `\`, so the pattern must be used with
    /// `ESCAPE '\'`.
    pub fn title_pattern(&self) -> Option<String> {
        self.title.as_deref().map(|title| {
            let mut pattern = String::with_capacity(title.len() + 2);
            pattern.push('%');
            for ch in title.chars() {
                if matches!(ch, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }
}

/// A validated page window: one-based page number and rows per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self, TypeConstraintError> {
        if page == 0 {
            return Err(TypeConstraintError::ZeroPage);
        }
        if per_page == 0 {
            return Err(TypeConstraintError::ZeroPageSize);
        }
        Ok(Self { page, per_page })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of matching rows skipped before this page starts.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of pages needed to show `total` rows.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

/// One page of the staff ticket list.
#[derive(Clone, Debug, PartialEq)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub page: usize,
    pub pages: usize,
}
