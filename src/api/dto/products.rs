/*
 * Responsibility
 * - products の request/response DTO
 * - 形式チェックは validate() に集約 (presence もここで見る)
 */
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::repos::product_repo::{Product, ProductFields};

/// Untrusted candidate values for a product.
///
/// Every field is optional at the binding layer so that a missing field is a
/// field error in the response, not a deserialization failure. `validate`
/// consumes the payload and hands back store-ready fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: Option<String>,
    pub maker: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
}

impl ProductData {
    pub fn validate(self) -> Result<ProductFields, Vec<FieldError>> {
        let mut fields = Vec::new();

        match &self.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => fields.push(FieldError {
                field: "name",
                message: "name must not be blank",
            }),
        }

        match &self.maker {
            Some(maker) if !maker.trim().is_empty() => {}
            _ => fields.push(FieldError {
                field: "maker",
                message: "maker must not be blank",
            }),
        }

        match self.price {
            Some(price) if price >= 0 => {}
            Some(_) => fields.push(FieldError {
                field: "price",
                message: "price must not be negative",
            }),
            None => fields.push(FieldError {
                field: "price",
                message: "price is required",
            }),
        }

        if !fields.is_empty() {
            return Err(fields);
        }

        Ok(ProductFields {
            name: self.name.unwrap_or_default(),
            maker: self.maker.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            maker: p.maker,
            price: p.price,
            image_url: p.image_url,
        }
    }
}
