use serde::{Deserialize, Deserializer};

use crate::domain::ticket::{PageRequest, TicketFilter};
use crate::domain::types::DepartmentId;
use crate::forms::FormError;

/// Raw parameters of the staff ticket list request.
///
/// Everything arrives as an optional string so that malformed values are
/// reported with a specific error code instead of a generic decoding failure.
/// Numbers and booleans sent in a JSON body are kept in their textual form.
///
/// The form does not derive `validator::Validate`: every rejected field maps to
/// its own API error code, and filter fields are normalized rather than
/// rejected, which field-level validation rules cannot express.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetTicketsForm {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<String>,
    /// Rows per page.
    #[serde(default, deserialize_with = "lenient")]
    pub rpp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub closed: Option<String>,
    #[serde(rename = "departmentId", default, deserialize_with = "lenient")]
    pub department_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        RawValue::Text(text) => text,
        RawValue::Number(number) => number.to_string(),
        RawValue::Flag(flag) => flag.to_string(),
    }))
}

/// Validated ticket list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketListPayload {
    pub filter: TicketFilter,
    pub window: PageRequest,
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n > 0)
}

fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|s| {
        ["1", "true", "on", "yes"]
            .iter()
            .any(|t| s.eq_ignore_ascii_case(t))
    })
}

impl GetTicketsForm {
    /// Validates the raw parameters. `max_page_size` caps the `rpp` value.
    pub fn validate(&self, max_page_size: usize) -> Result<TicketListPayload, FormError> {
        let page = parse_positive(trimmed(&self.page)).ok_or(FormError::InvalidPage)?;

        let per_page = parse_positive(trimmed(&self.rpp))
            .filter(|n| *n <= max_page_size)
            .ok_or(FormError::InvalidPageSize)?;

        let window = PageRequest::new(page, per_page).map_err(|_| FormError::InvalidPage)?;

        let mut filter = TicketFilter::new().closed_only(is_truthy(trimmed(&self.closed)));

        if let Some(title) = trimmed(&self.title) {
            filter = filter.title(title);
        }

        match trimmed(&self.department_id) {
            None | Some("0") => {}
            Some(raw) => {
                let department_id = raw
                    .parse::<i32>()
                    .ok()
                    .and_then(|id| DepartmentId::new(id).ok());
                filter = match department_id {
                    Some(department_id) => filter.department(department_id),
                    None => filter.unknown_department(),
                };
            }
        }

        Ok(TicketListPayload { filter, window })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 100;

    fn form(page: &str, rpp: &str) -> GetTicketsForm {
        GetTicketsForm {
            page: Some(page.to_string()),
            rpp: Some(rpp.to_string()),
            ..GetTicketsForm::default()
        }
    }

    #[test]
    fn minimal_form_has_no_constraints() {
        let payload = form("2", "10").validate(MAX).unwrap();
        assert_eq!(payload.window, PageRequest::new(2, 10).unwrap());
        assert_eq!(payload.filter, TicketFilter::default());
    }

    #[test]
    fn page_must_be_a_positive_number() {
        for page in ["abc", "", "0", "-1", "1.5", " "] {
            assert_eq!(
                form(page, "10").validate(MAX),
                Err(FormError::InvalidPage),
                "page {page:?}"
            );
        }
        let missing = GetTicketsForm {
            rpp: Some("10".to_string()),
            ..GetTicketsForm::default()
        };
        assert_eq!(missing.validate(MAX), Err(FormError::InvalidPage));
    }

    #[test]
    fn page_is_checked_before_page_size() {
        assert_eq!(form("x", "0").validate(MAX), Err(FormError::InvalidPage));
    }

    #[test]
    fn page_size_must_be_positive_and_bounded() {
        for rpp in ["0", "abc", "", "101"] {
            assert_eq!(
                form("1", rpp).validate(MAX),
                Err(FormError::InvalidPageSize),
                "rpp {rpp:?}"
            );
        }
        assert!(form("1", "100").validate(MAX).is_ok());
        assert!(form(" 3 ", " 7 ").validate(MAX).is_ok());
    }

    #[test]
    fn falsy_filters_are_omitted() {
        let raw = GetTicketsForm {
            closed: Some("0".to_string()),
            department_id: Some("0".to_string()),
            title: Some("   ".to_string()),
            ..form("1", "10")
        };
        assert_eq!(raw.validate(MAX).unwrap().filter, TicketFilter::default());

        let raw = GetTicketsForm {
            closed: Some("false".to_string()),
            department_id: Some(String::new()),
            ..form("1", "10")
        };
        assert_eq!(raw.validate(MAX).unwrap().filter, TicketFilter::default());
    }

    #[test]
    fn present_filters_are_collected() {
        let raw = GetTicketsForm {
            closed: Some("TRUE".to_string()),
            department_id: Some("4".to_string()),
            title: Some(" Login ".to_string()),
            ..form("1", "10")
        };
        let filter = raw.validate(MAX).unwrap().filter;
        assert!(filter.closed_only);
        assert_eq!(filter.department_id, Some(DepartmentId::new(4).unwrap()));
        assert_eq!(filter.title.as_deref(), Some("Login"));
    }

    #[test]
    fn malformed_department_matches_nothing() {
        for department in ["sales", "-2", "1.5"] {
            let raw = GetTicketsForm {
                department_id: Some(department.to_string()),
                ..form("1", "10")
            };
            let filter = raw.validate(MAX).unwrap().filter;
            assert!(filter.matches_nothing(), "department {department:?}");
            assert_eq!(filter.department_id, None);
        }
    }

    #[test]
    fn json_scalars_are_read_as_text() {
        let raw: GetTicketsForm = serde_json::from_str(
            r#"{"page": 2, "rpp": "5", "closed": true, "departmentId": 3, "title": null}"#,
        )
        .unwrap();
        assert_eq!(raw.page.as_deref(), Some("2"));
        assert_eq!(raw.rpp.as_deref(), Some("5"));
        assert_eq!(raw.closed.as_deref(), Some("true"));
        assert_eq!(raw.department_id.as_deref(), Some("3"));
        assert_eq!(raw.title, None);

        let payload = raw.validate(MAX).unwrap();
        assert_eq!(payload.window, PageRequest::new(2, 5).unwrap());
        assert!(payload.filter.closed_only);
        assert_eq!(payload.filter.department_id, Some(DepartmentId::new(3).unwrap()));
    }

    #[test]
    fn missing_json_fields_are_absent() {
        let raw: GetTicketsForm = serde_json::from_str(r#"{"page": "abc"}"#).unwrap();
        assert_eq!(raw.page.as_deref(), Some("abc"));
        assert_eq!(raw.rpp, None);
        assert_eq!(raw.validate(MAX), Err(FormError::InvalidPage));
    }
}
