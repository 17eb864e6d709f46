use crate::core::source::SourceDescriptor;
use crate::domain::model::{FilterCriteria, RequestTarget};

pub const YEAR_WINDOW: i64 = 10;

/// Translates the criteria into the source's `where` expression.
///
/// Caller strings are interpolated as-is; a `'` in a value ends the literal early.
pub fn build_query(source: &SourceDescriptor, criteria: &FilterCriteria) -> RequestTarget {
    let fields = source.fields;
    let mut clauses = Vec::new();

    if let Some(id) = &criteria.id {
        clauses.push(format!("{}='{}'", fields.id, id));
    }

    if let Some(municipality) = &criteria.municipality {
        clauses.push(format!("{}='{}'", fields.municipality, municipality));
    }

    if let Some(monument_type) = &criteria.monument_type {
        clauses.push(format!("{} LIKE '%{}%'", fields.type_filter, monument_type));
    }

    if let Some(year) = criteria.year {
        clauses.push(format!("{}>={}", fields.year, year - YEAR_WINDOW));
        clauses.push(format!("{}<={}", fields.year, year + YEAR_WINDOW));
    }

    let filter = if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" AND "))
    };

    RequestTarget {
        endpoint: source.endpoint.clone(),
        filter,
    }
}
