use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::ticket::Ticket;
use crate::models::ticket::Ticket as DbTicket;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TicketListQuery, TicketReader};

/// Escape character used by the title `LIKE` pattern.
const LIKE_ESCAPE: char = '\\';

impl TicketReader for DieselRepository {
    fn list_staff_tickets(&self, query: TicketListQuery) -> RepositoryResult<(usize, Vec<Ticket>)> {
        use crate::schema::{staff_tickets, tickets};

        if query.filter.matches_nothing() {
            log::debug!("Ticket filter for staff {} matches nothing", query.staff_id);
            return Ok((0, Vec::new()));
        }

        let mut conn = self.conn()?;
        let title_pattern = query.filter.title_pattern();

        // One predicate for both the count and the page.
        let query_builder = || {
            let shared = staff_tickets::table
                .filter(staff_tickets::staff_id.eq(query.staff_id.get()))
                .select(staff_tickets::ticket_id);

            let mut items = tickets::table
                .filter(tickets::id.eq_any(shared))
                .into_boxed::<Sqlite>();

            if let Some(pattern) = &title_pattern {
                items = items.filter(tickets::title.like(pattern.clone()).escape(LIKE_ESCAPE));
            }
            if let Some(department_id) = query.filter.department_id {
                items = items.filter(tickets::department_id.eq(department_id.get()));
            }
            if query.filter.closed_only {
                items = items.filter(tickets::closed.eq(true));
            }
            items
        };

        let (total, rows) = conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = query_builder().count().get_result::<i64>(conn)? as usize;

            let mut items = query_builder().order(tickets::id.asc());
            if let Some(window) = &query.pagination {
                let limit = i64::try_from(window.per_page()).unwrap_or(i64::MAX);
                let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);
                items = items.limit(limit).offset(offset);
            }

            let rows = items.load::<DbTicket>(conn)?;
            Ok((total, rows))
        })?;

        log::debug!(
            "Loaded {} of {} tickets shared with staff {}",
            rows.len(),
            total,
            query.staff_id
        );

        let tickets = rows
            .into_iter()
            .map(Ticket::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, tickets))
    }
}
