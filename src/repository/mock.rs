//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::ticket::Ticket;
use crate::repository::errors::RepositoryResult;
use crate::repository::{TicketListQuery, TicketReader};

mock! {
    pub Repository {}

    impl TicketReader for Repository {
        fn list_staff_tickets(
            &self,
            query: TicketListQuery,
        ) -> RepositoryResult<(usize, Vec<Ticket>)>;
    }
}
