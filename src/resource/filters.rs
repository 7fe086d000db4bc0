use sea_orm::sea_query::Condition;
use sea_orm::ColumnTrait;

use super::{ApiResource, FieldKind};
use crate::types::error::AppError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Contains,
    NotContains,
}

/// Operator tokens, longest first so that `<=` wins over `<` and the
/// contains forms win over `==`.
const OPERATORS: &[(&str, FilterOp)] = &[
    ("=!contains=", FilterOp::NotContains),
    ("=contains=", FilterOp::Contains),
    ("==", FilterOp::Eq),
    ("!=", FilterOp::Ne),
    ("<=", FilterOp::Le),
    (">=", FilterOp::Ge),
    ("<", FilterOp::Lt),
    (">", FilterOp::Gt),
];

/// Parse a filter string like `id>=2,username=contains=normal` into a
/// sea-orm condition for the given resource.
///
/// Fields outside the resource's allow-list and operators that do not
/// match the field type are rejected.
pub fn parse_filters<E: ApiResource>(given: Option<&str>) -> Result<Condition, AppError> {
    let mut condition = Condition::all();
    let Some(given) = given else {
        return Ok(condition);
    };

    for term in given.split(',').filter(|term| !term.is_empty()) {
        let (field, op, value) = split_term(term)?;

        if !E::FILTER_FIELDS.contains(&field) {
            return Err(AppError::Filter(format!("Invalid filter field: \"{field}\"")));
        }
        let Some((column, kind)) = E::column_for(field) else {
            return Err(AppError::Filter(format!("Invalid filter field: \"{field}\"")));
        };

        let expr = match kind {
            FieldKind::Int => {
                let number: i32 = value.parse().map_err(|_| {
                    AppError::Filter(format!("Invalid filter value: \"{value}\""))
                })?;
                match op {
                    FilterOp::Eq => column.eq(number),
                    FilterOp::Ne => column.ne(number),
                    FilterOp::Lt => column.lt(number),
                    FilterOp::Le => column.lte(number),
                    FilterOp::Gt => column.gt(number),
                    FilterOp::Ge => column.gte(number),
                    FilterOp::Contains | FilterOp::NotContains => {
                        return Err(invalid_operator(term));
                    }
                }
            }
            FieldKind::Str => match op {
                FilterOp::Eq => column.eq(value),
                FilterOp::Ne => column.ne(value),
                FilterOp::Contains => column.like(format!("%{value}%")),
                FilterOp::NotContains => {
                    condition = condition
                        .add(Condition::all().add(column.like(format!("%{value}%"))).not());
                    continue;
                }
                _ => return Err(invalid_operator(term)),
            },
        };
        condition = condition.add(expr);
    }

    Ok(condition)
}

fn invalid_operator(term: &str) -> AppError {
    AppError::Filter(format!("Invalid filter operator in: \"{term}\""))
}

/// Split one filter term into field, operator and value.
fn split_term(term: &str) -> Result<(&str, FilterOp, &str), AppError> {
    for (token, op) in OPERATORS {
        if let Some(position) = term.find(token) {
            let field = &term[..position];
            let value = &term[position + token.len()..];
            if field.is_empty() {
                return Err(invalid_operator(term));
            }
            return Ok((field, *op, value));
        }
    }
    Err(invalid_operator(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use my_model::user::Entity as UserEntity;

    #[test]
    fn invalid_field_is_rejected() {
        let result = parse_filters::<UserEntity>(Some("password_hash==x"));
        assert!(matches!(result, Err(AppError::Filter(_))));
    }

    #[test]
    fn non_existing_field_is_rejected() {
        let result = parse_filters::<UserEntity>(Some("username_wrong==root"));
        assert!(matches!(result, Err(AppError::Filter(_))));
    }

    #[test]
    fn int_operators_are_accepted() {
        for operator in ["==", "!=", "<", "<=", ">", ">="] {
            let result = parse_filters::<UserEntity>(Some(&format!("id{operator}1")));
            assert!(result.is_ok(), "operator {operator} should be valid");
        }
    }

    #[test]
    fn str_operators_are_accepted() {
        for operator in ["==", "!=", "=contains=", "=!contains="] {
            let result = parse_filters::<UserEntity>(Some(&format!("username{operator}root")));
            assert!(result.is_ok(), "operator {operator} should be valid");
        }
    }

    #[test]
    fn wrong_operators_are_rejected() {
        for term in ["username=root", "username=is=root", "id<>1", "id=1"] {
            let result = parse_filters::<UserEntity>(Some(term));
            assert!(
                matches!(result, Err(AppError::Filter(_))),
                "term {term} should be rejected"
            );
        }
    }

    #[test]
    fn contains_on_int_field_is_rejected() {
        let result = parse_filters::<UserEntity>(Some("id=contains=1"));
        assert!(matches!(result, Err(AppError::Filter(_))));
    }

    #[test]
    fn non_numeric_value_on_int_field_is_rejected() {
        let result = parse_filters::<UserEntity>(Some("id==abc"));
        assert!(matches!(result, Err(AppError::Filter(_))));
    }

    #[test]
    fn multiple_terms_are_combined() {
        let result = parse_filters::<UserEntity>(Some("id>=2,username=contains=normal"));
        assert!(result.is_ok());
    }

    #[test]
    fn empty_filter_yields_empty_condition() {
        assert!(parse_filters::<UserEntity>(None).is_ok());
        assert!(parse_filters::<UserEntity>(Some("")).is_ok());
    }
}
