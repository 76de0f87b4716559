//! Catalog entities
//!
//! Field names on the wire follow the Northwind naming (`ProductID`,
//! `UnitsInStock`, ...); columns are snake_case.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

pub type ProductId = i32;
pub type SupplierId = i32;

/// Product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(rename = "ProductID")]
    #[schema(value_type = i32, example = 7)]
    pub product_id: ProductId,
    #[schema(example = "Uncle Bob's Organic Dried Pears")]
    pub product_name: String,
    #[serde(rename = "SupplierID", default)]
    #[schema(value_type = Option<i32>)]
    pub supplier_id: Option<SupplierId>,
    #[serde(rename = "CategoryID", default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub quantity_per_unit: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "30.00")]
    pub unit_price: Option<Decimal>,
    #[schema(example = 15)]
    pub units_in_stock: i32,
    #[serde(default)]
    pub units_on_order: i32,
    #[serde(default)]
    pub reorder_level: i32,
    #[serde(default)]
    pub discontinued: bool,
}

/// Supplier row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Supplier {
    #[serde(rename = "SupplierID")]
    #[schema(value_type = i32, example = 3)]
    pub supplier_id: SupplierId,
    pub company_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    #[schema(example = "221B Baker St")]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(example = "London")]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    #[schema(example = "NW16XE")]
    pub postal_code: Option<String>,
    #[serde(default)]
    #[schema(example = "UK")]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Supplier {
    /// `Address, City, PostalCode, Country` joined with ", ".
    ///
    /// NULL columns render as empty segments, so the line always has three
    /// separators.
    pub fn address_line(&self) -> String {
        [&self.address, &self.city, &self.postal_code, &self.country]
            .iter()
            .map(|field| field.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Offset pagination for entity listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Page {
    /// Rows to skip
    #[serde(default)]
    pub offset: u32,
    /// Rows to return (default 50, max 500)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Page {
    /// Limit clamped to `1..=MAX_PAGE_LIMIT`
    pub fn effective_limit(&self) -> u32 {
        self.limit.clamp(1, MAX_PAGE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(address: Option<&str>, city: Option<&str>) -> Supplier {
        Supplier {
            supplier_id: 3,
            company_name: "Grandma Kelly's Homestead".to_string(),
            contact_name: None,
            address: address.map(str::to_string),
            city: city.map(str::to_string),
            region: None,
            postal_code: Some("NW16XE".to_string()),
            country: Some("UK".to_string()),
            phone: None,
        }
    }

    #[test]
    fn test_address_line_joins_in_fixed_order() {
        let s = supplier(Some("221B Baker St"), Some("London"));
        assert_eq!(s.address_line(), "221B Baker St, London, NW16XE, UK");
    }

    #[test]
    fn test_address_line_null_fields_are_empty_segments() {
        let s = supplier(None, Some("London"));
        assert_eq!(s.address_line(), ", London, NW16XE, UK");

        let s = supplier(None, None);
        assert_eq!(s.address_line().matches(", ").count(), 3);
    }

    #[test]
    fn test_product_wire_names() {
        let product = Product {
            product_id: 7,
            product_name: "Dried Pears".to_string(),
            supplier_id: Some(3),
            category_id: None,
            quantity_per_unit: None,
            unit_price: Some(Decimal::new(3000, 2)),
            units_in_stock: 15,
            units_on_order: 0,
            reorder_level: 10,
            discontinued: false,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["ProductID"], 7);
        assert_eq!(json["SupplierID"], 3);
        assert_eq!(json["UnitsInStock"], 15);
        assert_eq!(json["Discontinued"], false);
        assert!(json.get("product_id").is_none());
    }

    #[test]
    fn test_product_deserialize_sparse_row() {
        let product: Product = serde_json::from_str(
            r#"{"ProductID": 1, "ProductName": "Chai", "UnitsInStock": 39}"#,
        )
        .unwrap();
        assert_eq!(product.product_id, 1);
        assert_eq!(product.units_on_order, 0);
        assert!(!product.discontinued);
        assert!(product.unit_price.is_none());
    }

    #[test]
    fn test_page_limit_clamped() {
        assert_eq!(Page::default().effective_limit(), DEFAULT_PAGE_LIMIT);
        let page = Page {
            offset: 0,
            limit: 10_000,
        };
        assert_eq!(page.effective_limit(), MAX_PAGE_LIMIT);
        let page = Page { offset: 0, limit: 0 };
        assert_eq!(page.effective_limit(), 1);
    }
}
