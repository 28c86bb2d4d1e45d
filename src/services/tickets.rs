use crate::domain::staff::StaffIdentity;
use crate::domain::ticket::TicketPage;
use crate::domain::types::StaffLevel;
use crate::dto::tickets::TicketsPageData;
use crate::forms::tickets::GetTicketsForm;
use crate::repository::{TicketListQuery, TicketReader};
use crate::services::{ServiceError, ServiceResult};

/// Minimum staff level allowed to list shared tickets.
pub const LIST_TICKETS_LEVEL: StaffLevel = StaffLevel::One;

/// Returns one page of the tickets shared with `staff`, narrowed by the
/// optional filters in `form`.
///
/// The caller's level and the raw parameters are validated before the store
/// is touched. `pages` is computed from the same predicate as `tickets`.
pub fn list_staff_tickets<R>(
    repo: &R,
    staff: &StaffIdentity,
    form: GetTicketsForm,
    max_page_size: usize,
) -> ServiceResult<TicketsPageData>
where
    R: TicketReader + ?Sized,
{
    if !staff.has_level(LIST_TICKETS_LEVEL) {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form.validate(max_page_size).map_err(|err| {
        log::warn!("Rejected ticket list request from staff {}: {err}", staff.id);
        ServiceError::from(err)
    })?;
    let window = payload.window;

    let query = TicketListQuery::new(staff)
        .filter(payload.filter)
        .paginate(window);

    let (total, tickets) = repo.list_staff_tickets(query).map_err(|err| {
        log::error!("Failed to list tickets for staff {}: {err}", staff.id);
        ServiceError::from(err)
    })?;

    Ok(TicketPage {
        tickets,
        page: window.page(),
        pages: window.page_count(total),
    }
    .into())
}
