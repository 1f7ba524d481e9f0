use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

/// Stock-keeping unit: the unique, immutable product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Storage form of `isAvailable`: an integer column holding 0 or 1.
///
/// The wire always carries a boolean; every write goes through `From<bool>`
/// and every read goes through `from_column`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AvailabilityFlag(i64);

impl AvailabilityFlag {
    /// Map a nullable integer column. NULL reads as "not available".
    pub fn from_column(raw: Option<i64>) -> Self {
        Self(raw.unwrap_or(0))
    }

    pub fn raw(self) -> i64 {
        self.0
    }

    /// Only an exact `1` counts as available.
    pub fn is_available(self) -> bool {
        self.0 == 1
    }
}

impl From<bool> for AvailabilityFlag {
    fn from(value: bool) -> Self {
        Self(if value { 1 } else { 0 })
    }
}

impl From<AvailabilityFlag> for bool {
    fn from(flag: AvailabilityFlag) -> Self {
        flag.is_available()
    }
}

/// A product as exposed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub sku: Sku,
    pub product_name: String,
    /// Price in smallest currency unit.
    pub price: i64,
    pub is_available: bool,
}

impl Product {
    /// Build a product from its stored row representation.
    pub fn from_row(
        sku: String,
        product_name: String,
        price: i64,
        is_available: Option<i64>,
    ) -> Self {
        Self {
            sku: Sku(sku),
            product_name,
            price,
            is_available: AvailabilityFlag::from_column(is_available).is_available(),
        }
    }
}

pub const CREATE_INCOMPLETE: &str =
    "Incomplete product data. sku, productName and price are required.";
pub const UPDATE_INCOMPLETE: &str =
    "Incomplete update data. productName, price and isAvailable are required.";
pub const NEGATIVE_PRICE: &str = "price must not be negative.";

/// Validated input for inserting a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub sku: Sku,
    pub product_name: String,
    pub price: i64,
    pub is_available: bool,
}

impl NewProduct {
    /// Validate raw create fields.
    ///
    /// `sku`, `product_name` and `price` must be present and truthy: an empty
    /// string or a price of `0` counts as missing. `is_available` defaults to
    /// `false`.
    pub fn validate(
        sku: Option<String>,
        product_name: Option<String>,
        price: Option<i64>,
        is_available: Option<bool>,
    ) -> DomainResult<Self> {
        let (Some(sku), Some(product_name), Some(price)) = (
            sku.filter(|s| !s.is_empty()),
            product_name.filter(|n| !n.is_empty()),
            price.filter(|p| *p != 0),
        ) else {
            return Err(DomainError::validation(CREATE_INCOMPLETE));
        };

        if price < 0 {
            return Err(DomainError::validation(NEGATIVE_PRICE));
        }

        Ok(Self {
            sku: Sku(sku),
            product_name,
            price,
            is_available: is_available.unwrap_or(false),
        })
    }

    pub fn availability_flag(&self) -> AvailabilityFlag {
        AvailabilityFlag::from(self.is_available)
    }

    pub fn into_product(self) -> Product {
        Product {
            sku: self.sku,
            product_name: self.product_name,
            price: self.price,
            is_available: self.is_available,
        }
    }
}

/// Validated full-row replacement of a product's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductChanges {
    pub product_name: String,
    pub price: i64,
    pub is_available: bool,
}

impl ProductChanges {
    /// Validate raw update fields.
    ///
    /// Unlike create, `is_available` is checked for presence only, so an
    /// explicit `false` is accepted.
    pub fn validate(
        product_name: Option<String>,
        price: Option<i64>,
        is_available: Option<bool>,
    ) -> DomainResult<Self> {
        let (Some(product_name), Some(price), Some(is_available)) = (
            product_name.filter(|n| !n.is_empty()),
            price.filter(|p| *p != 0),
            is_available,
        ) else {
            return Err(DomainError::validation(UPDATE_INCOMPLETE));
        };

        if price < 0 {
            return Err(DomainError::validation(NEGATIVE_PRICE));
        }

        Ok(Self {
            product_name,
            price,
            is_available,
        })
    }

    pub fn availability_flag(&self) -> AvailabilityFlag {
        AvailabilityFlag::from(self.is_available)
    }

    pub fn apply_to(&self, product: &mut Product) {
        product.product_name = self.product_name.clone();
        product.price = self.price;
        product.is_available = self.is_available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn create_accepts_complete_input_and_defaults_availability() {
        let p = NewProduct::validate(s("SKU-X"), s("Widget"), Some(1000), None).unwrap();
        assert_eq!(p.sku.as_str(), "SKU-X");
        assert_eq!(p.product_name, "Widget");
        assert_eq!(p.price, 1000);
        assert!(!p.is_available);
        assert_eq!(p.availability_flag().raw(), 0);
    }

    #[test]
    fn create_rejects_missing_fields() {
        for (sku, name, price) in [
            (None, s("Widget"), Some(10)),
            (s("SKU"), None, Some(10)),
            (s("SKU"), s("Widget"), None),
            (s(""), s("Widget"), Some(10)),
            (s("SKU"), s(""), Some(10)),
        ] {
            let err = NewProduct::validate(sku, name, price, Some(true)).unwrap_err();
            assert_eq!(err, DomainError::validation(CREATE_INCOMPLETE));
        }
    }

    #[test]
    fn create_treats_zero_price_as_missing() {
        let err = NewProduct::validate(s("SKU"), s("Free"), Some(0), Some(true)).unwrap_err();
        assert_eq!(err, DomainError::validation(CREATE_INCOMPLETE));
    }

    #[test]
    fn create_rejects_negative_price() {
        let err = NewProduct::validate(s("SKU"), s("Widget"), Some(-5), None).unwrap_err();
        assert_eq!(err, DomainError::validation(NEGATIVE_PRICE));
    }

    #[test]
    fn update_accepts_explicit_false() {
        let c = ProductChanges::validate(s("Widget2"), Some(2000), Some(false)).unwrap();
        assert!(!c.is_available);
        assert_eq!(c.availability_flag().raw(), 0);
    }

    #[test]
    fn update_requires_availability_presence() {
        let err = ProductChanges::validate(s("Widget2"), Some(2000), None).unwrap_err();
        assert_eq!(err, DomainError::validation(UPDATE_INCOMPLETE));
    }

    #[test]
    fn update_treats_zero_price_as_missing() {
        let err = ProductChanges::validate(s("Widget2"), Some(0), Some(true)).unwrap_err();
        assert_eq!(err, DomainError::validation(UPDATE_INCOMPLETE));
    }

    #[test]
    fn availability_flag_reads_only_one_as_true() {
        assert!(AvailabilityFlag::from_column(Some(1)).is_available());
        assert!(!AvailabilityFlag::from_column(Some(0)).is_available());
        assert!(!AvailabilityFlag::from_column(Some(2)).is_available());
        assert!(!AvailabilityFlag::from_column(None).is_available());
    }

    #[test]
    fn product_serializes_with_camel_case_and_boolean_flag() {
        let p = Product::from_row("SKU-X".into(), "Widget".into(), 1000, Some(1));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sku": "SKU-X",
                "productName": "Widget",
                "price": 1000,
                "isAvailable": true,
            })
        );
    }

    #[test]
    fn changes_replace_all_mutable_fields() {
        let mut p = Product::from_row("SKU-X".into(), "Widget".into(), 1000, Some(1));
        ProductChanges::validate(s("Widget2"), Some(2000), Some(false))
            .unwrap()
            .apply_to(&mut p);
        assert_eq!(p.sku.as_str(), "SKU-X");
        assert_eq!(p.product_name, "Widget2");
        assert_eq!(p.price, 2000);
        assert!(!p.is_available);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a boolean survives the trip through the stored flag.
            #[test]
            fn availability_roundtrips_through_flag(available in any::<bool>()) {
                let flag = AvailabilityFlag::from(available);
                prop_assert!(flag.raw() == 0 || flag.raw() == 1);
                let stored = AvailabilityFlag::from_column(Some(flag.raw()));
                prop_assert_eq!(bool::from(stored), available);
            }

            /// Property: any truthy create input validates and keeps its fields.
            #[test]
            fn truthy_create_input_validates(
                sku in "[A-Z0-9-]{1,20}",
                name in "[A-Za-z][A-Za-z0-9 ]{0,60}",
                price in 1i64..10_000_000,
                available in proptest::option::of(any::<bool>())
            ) {
                let p = NewProduct::validate(
                    Some(sku.clone()),
                    Some(name.clone()),
                    Some(price),
                    available,
                ).unwrap();
                prop_assert_eq!(p.sku.as_str(), sku.as_str());
                prop_assert_eq!(p.product_name, name);
                prop_assert_eq!(p.price, price);
                prop_assert_eq!(p.is_available, available.unwrap_or(false));
            }
        }
    }
}
