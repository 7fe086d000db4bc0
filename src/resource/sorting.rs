use sea_orm::Order;

use super::ApiResource;
use crate::types::error::AppError;

/// Parse a sort string like `username,^created` into ordered columns.
/// A `^` prefix sorts descending. Fields outside the resource's
/// allow-list are rejected.
pub fn parse_sort<E: ApiResource>(
    sort: Option<&str>,
) -> Result<Vec<(E::Column, Order)>, AppError> {
    let mut sort_fields = Vec::new();
    let Some(sort) = sort else {
        return Ok(sort_fields);
    };

    for field in sort.split(',').filter(|field| !field.is_empty()) {
        let (field_name, order) = match field.strip_prefix('^') {
            Some(name) => (name, Order::Desc),
            None => (field, Order::Asc),
        };

        let column = E::column_for(field_name).map(|(column, _)| column);
        match column {
            Some(column) if E::SORT_FIELDS.contains(&field_name) => {
                sort_fields.push((column, order));
            }
            _ => {
                return Err(AppError::Sorting {
                    message: format!("Invalid sort field: \"{field_name}\""),
                    allowed_sort_fields: E::SORT_FIELDS
                        .iter()
                        .map(|field| field.to_string())
                        .collect(),
                });
            }
        }
    }

    Ok(sort_fields)
}
