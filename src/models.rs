//! Frontend Models
//!
//! Data structures mirroring the REST API records. Decoding is lenient:
//! optional fields default so a partially populated row still renders.

use serde::{Deserialize, Serialize};

/// Product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub available: bool,
}

fn default_category() -> String {
    "clothing".to_string()
}

/// Category record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry in the stock movement history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: u32,
    pub product_id: u32,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity_change: i64,
    pub action: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_id: u32,
    pub status: String,
    #[serde(default)]
    pub order_date: Option<String>,
}

/// Transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub order_id: u32,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub total_amount: i64,
    pub status: String,
}

/// User account record
///
/// The disable flag travels under an underscore-prefixed wire name; the
/// client treats it as an opaque boolean and only labels it Aktif/Nonaktif.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "_is_active_disabled", default)]
    pub is_active_disabled: bool,
}

/// Payload of a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_with_missing_optionals() {
        let p: Product =
            serde_json::from_str(r#"{"id":1,"name":"Kemeja","price":150000}"#).unwrap();
        assert_eq!(p.category, "clothing");
        assert_eq!(p.size, "");
        assert!(!p.available);
    }

    #[test]
    fn user_decodes_underscore_disable_flag() {
        let u: User = serde_json::from_str(
            r#"{"id":3,"fullname":"Budi","username":"budi","email":"budi@toko.id","role":"cashier","_is_active_disabled":true}"#,
        )
        .unwrap();
        assert!(u.is_active_disabled);

        let round = serde_json::to_value(&u).unwrap();
        assert_eq!(round["_is_active_disabled"], serde_json::json!(true));
    }

    #[test]
    fn stock_entry_tolerates_missing_product_name() {
        let s: StockEntry = serde_json::from_str(
            r#"{"id":9,"product_id":1,"quantity_change":-5,"action":"keluar"}"#,
        )
        .unwrap();
        assert_eq!(s.product_name, None);
        assert_eq!(s.quantity_change, -5);
    }
}
