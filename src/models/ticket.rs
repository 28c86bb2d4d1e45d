use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::ticket::Ticket as DomainTicket;
use crate::domain::types::{DepartmentId, TicketId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tickets)]
/// Diesel model for [`crate::domain::ticket::Ticket`].
pub struct Ticket {
    pub id: i32,
    pub ticket_number: i32,
    pub title: String,
    pub department_id: i32,
    pub priority: String,
    pub closed: bool,
    pub unread: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Ticket> for DomainTicket {
    type Error = TypeConstraintError;

    fn try_from(ticket: Ticket) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TicketId::new(ticket.id)?,
            ticket_number: ticket.ticket_number,
            title: ticket.title,
            department_id: DepartmentId::new(ticket.department_id)?,
            priority: ticket.priority,
            closed: ticket.closed,
            unread: ticket.unread,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(department_id: i32) -> Ticket {
        let now: NaiveDateTime = Utc::now().naive_utc();
        Ticket {
            id: 3,
            ticket_number: 100_003,
            title: "Printer on fire".to_string(),
            department_id,
            priority: "high".to_string(),
            closed: true,
            unread: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn ticket_into_domain() {
        let db_ticket = row(2);
        let created_at = db_ticket.created_at;
        let domain = DomainTicket::try_from(db_ticket).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.ticket_number, 100_003);
        assert_eq!(domain.title, "Printer on fire");
        assert_eq!(domain.department_id.get(), 2);
        assert_eq!(domain.priority, "high");
        assert!(domain.closed);
        assert!(!domain.unread);
        assert_eq!(domain.created_at, created_at);
    }

    #[test]
    fn invalid_department_is_rejected() {
        assert_eq!(
            DomainTicket::try_from(row(0)),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
