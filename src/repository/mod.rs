//! Ticket store access.
//!
//! Services depend on the [`TicketReader`] trait only; [`DieselRepository`]
//! is the SQLite implementation used by the server.

use crate::db::{DbConnection, DbPool};
use crate::domain::staff::StaffIdentity;
use crate::domain::ticket::{PageRequest, Ticket, TicketFilter};
use crate::domain::types::StaffId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod ticket;

/// Tickets shared with one staff member, narrowed by a filter and windowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketListQuery {
    /// Visibility scope: only tickets linked to this staff member.
    pub staff_id: StaffId,
    pub filter: TicketFilter,
    pub pagination: Option<PageRequest>,
}

impl TicketListQuery {
    pub fn new(staff: &StaffIdentity) -> Self {
        Self {
            staff_id: staff.id,
            filter: TicketFilter::default(),
            pagination: None,
        }
    }

    pub fn filter(mut self, filter: TicketFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn paginate(mut self, window: PageRequest) -> Self {
        self.pagination = Some(window);
        self
    }
}

pub trait TicketReader {
    /// Returns the number of tickets matching the query (ignoring the page
    /// window) together with the tickets inside the window, ordered by id.
    ///
    /// Both values are read from the same snapshot.
    fn list_staff_tickets(&self, query: TicketListQuery) -> RepositoryResult<(usize, Vec<Ticket>)>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            e.into()
        })
    }
}
