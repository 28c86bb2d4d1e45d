//! DTOs for the staff ticket list.

use serde::Serialize;

use crate::domain::ticket::{Ticket, TicketPage};

/// Payload of a successful `/staff/get-tickets` call.
#[derive(Debug, Serialize, PartialEq)]
pub struct TicketsPageData {
    /// Tickets of the requested page, ordered by id.
    pub tickets: Vec<Ticket>,
    /// Page number echoed back to the caller.
    pub page: usize,
    /// Total number of pages for the same filter.
    pub pages: usize,
}

impl From<TicketPage> for TicketsPageData {
    fn from(page: TicketPage) -> Self {
        Self {
            tickets: page.tickets,
            page: page.page,
            pages: page.pages,
        }
    }
}
