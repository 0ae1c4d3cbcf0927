use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product record, mirroring one row of the `produto` table.
///
/// `id` is `None` until the store assigns one on first insert and is
/// immutable afterwards. Equality and hash are structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    pub id: Option<i32>,
    pub name: String,
    pub amount: i32,
    pub birth_date: Option<NaiveDate>,
}

/// Wire-facing transfer object, mirroring [`Product`] 1:1.
///
/// Used for both request bodies and responses. On create the `id` is
/// ignored; on update the id from the request path overrides whatever the
/// body carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "amount must not be negative"))]
    pub amount: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            amount: product.amount,
            birth_date: product.birth_date,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            amount: dto.amount,
            birth_date: dto.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: Some(7),
            name: "Widget".to_string(),
            amount: 10,
            birth_date: NaiveDate::from_ymd_opt(2020, 5, 17),
        }
    }

    #[test]
    fn test_conversion_round_trips_field_by_field() {
        let product = widget();
        let dto = ProductDto::from(product.clone());
        assert_eq!(Product::from(dto), product);
    }

    #[test]
    fn test_dto_omits_absent_optionals_from_json() {
        let dto = ProductDto {
            id: None,
            name: "Widget".to_string(),
            amount: 10,
            birth_date: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Widget", "amount": 10}));
    }

    #[test]
    fn test_dto_validation_collects_all_violations() {
        let dto = ProductDto {
            id: None,
            name: String::new(),
            amount: -1,
            birth_date: None,
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_structural_equality_over_all_fields() {
        let a = widget();
        let mut b = widget();
        assert_eq!(a, b);
        b.amount = 11;
        assert_ne!(a, b);
    }
}
