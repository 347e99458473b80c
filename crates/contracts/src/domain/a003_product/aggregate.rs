use serde::{Deserialize, Serialize};

use crate::domain::entity_ref::{ref_id, EntityRef};
use crate::enums::status::{is_unknown, ActiveStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "discountPrice")]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub subcategory: Option<EntityRef>,
    #[serde(default)]
    pub vendor: Option<EntityRef>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: ActiveStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Price the customer pays: the sale price when it undercuts the list price
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(sale) if sale > 0.0 && sale < self.price => sale,
            _ => self.price,
        }
    }

    /// Whole-percent saving of the sale price, 0 when not discounted
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price, self.sale_price.unwrap_or(0.0))
    }

    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// `round((price - sale) / price * 100)`; 0 when there is no real discount
pub fn discount_percent(price: f64, sale_price: f64) -> u32 {
    if price <= 0.0 || sale_price <= 0.0 || sale_price >= price {
        return 0;
    }
    ((price - sale_price) / price * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub sale_price: f64,
    pub stock: i64,
    #[serde(rename = "category")]
    pub category_id: String,
    #[serde(rename = "subcategory", skip_serializing_if = "String::is_empty")]
    pub subcategory_id: String,
    /// First image URL; uploads happen elsewhere
    #[serde(skip)]
    pub image: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "is_unknown")]
    pub status: ActiveStatus,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Product name is required");
        }
        if self.price <= 0.0 {
            return Err("Price must be greater than zero");
        }
        if self.sale_price < 0.0 || (self.sale_price > 0.0 && self.sale_price >= self.price) {
            return Err("Sale price must be lower than the price");
        }
        if self.stock < 0 {
            return Err("Stock cannot be negative");
        }
        if self.category_id.trim().is_empty() {
            return Err("Category is required");
        }
        Ok(())
    }

    /// Fold the single image field back into the `images` list before sending.
    /// The field edits the main (first) image, so a changed value replaces it.
    pub fn prepare(&mut self) {
        let image = self.image.trim().to_string();
        if self.images.first().is_some_and(|first| *first != image) {
            self.images.remove(0);
        }
        self.images.retain(|i| *i != image);
        if !image.is_empty() {
            self.images.insert(0, image);
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id.clone()),
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price,
            sale_price: p.sale_price.unwrap_or(0.0),
            stock: p.stock,
            category_id: ref_id(&p.category),
            subcategory_id: ref_id(&p.subcategory),
            image: p.main_image().unwrap_or_default().to_string(),
            images: p.images.clone(),
            status: p.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(1000.0, 750.0), 25);
        assert_eq!(discount_percent(999.0, 666.0), 33);
        assert_eq!(discount_percent(100.0, 0.0), 0);
        assert_eq!(discount_percent(100.0, 120.0), 0);
        assert_eq!(discount_percent(0.0, 10.0), 0);
    }

    #[test]
    fn test_effective_price() {
        let p = product(r#"{"_id":"p1","name":"Lamp","price":500,"salePrice":400}"#);
        assert_eq!(p.effective_price(), 400.0);
        assert_eq!(p.discount_percent(), 20);
        let p = product(r#"{"_id":"p2","name":"Mug","price":200}"#);
        assert_eq!(p.effective_price(), 200.0);
    }

    #[test]
    fn test_draft_copies_row() {
        let p = product(
            r#"{"_id":"p1","name":"Lamp","price":500,"stock":3,
                "category":{"_id":"c1","name":"Home"},"vendor":"v9",
                "images":["a.jpg","b.jpg"],"status":"inactive"}"#,
        );
        let draft = ProductDto::from(&p);
        assert_eq!(draft.id.as_deref(), Some("p1"));
        assert_eq!(draft.name, p.name);
        assert_eq!(draft.price, p.price);
        assert_eq!(draft.stock, p.stock);
        assert_eq!(draft.category_id, "c1");
        assert_eq!(draft.image, "a.jpg");
        assert_eq!(draft.status, ActiveStatus::Inactive);
    }

    #[test]
    fn test_prepare_keeps_unchanged_main_image() {
        let mut draft = ProductDto {
            image: "a.jpg".into(),
            images: vec!["a.jpg".into(), "b.jpg".into()],
            ..ProductDto::default()
        };
        draft.prepare();
        assert_eq!(draft.images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_prepare_replaces_main_image() {
        let p = product(r#"{"_id":"p1","name":"Lamp","images":["old.jpg","side.jpg"]}"#);
        let mut draft = ProductDto::from(&p);
        draft.image = " new.jpg ".into();
        draft.prepare();
        assert_eq!(draft.images, vec!["new.jpg", "side.jpg"]);

        // picking another gallery image promotes it instead of duplicating it
        let mut draft = ProductDto::from(&p);
        draft.image = "side.jpg".into();
        draft.prepare();
        assert_eq!(draft.images, vec!["side.jpg"]);

        let mut draft = ProductDto {
            image: "first.jpg".into(),
            ..ProductDto::default()
        };
        draft.prepare();
        assert_eq!(draft.images, vec!["first.jpg"]);
    }

    #[test]
    fn test_validate() {
        let mut draft = ProductDto {
            name: "Lamp".into(),
            price: 100.0,
            category_id: "c1".into(),
            ..ProductDto::default()
        };
        assert!(draft.validate().is_ok());
        draft.sale_price = 150.0;
        assert!(draft.validate().is_err());
        draft.sale_price = 0.0;
        draft.price = 0.0;
        assert!(draft.validate().is_err());
    }
}
