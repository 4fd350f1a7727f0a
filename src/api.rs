//! REST API Command Wrappers
//!
//! Thin verb wrappers over the HTTP layer, one section per resource.
//! Payload structs carry numeric fields already coerced; string drafts are
//! the pages' concern.

use serde::Serialize;

use crate::http::{self, ApiError};
use crate::models::{Category, LoginData, Order, Product, StockEntry, Transaction, User};

// ========================
// Payload Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: i64,
    pub size: String,
    pub color: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStockEntry {
    pub product_id: u32,
    pub quantity_change: i64,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub customer_id: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub order_id: u32,
    pub payment_method: String,
    pub total_amount: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "_is_active_disabled")]
    pub is_active_disabled: bool,
}

// ========================
// Auth
// ========================

pub async fn login(payload: &LoginPayload) -> Result<LoginData, ApiError> {
    let env: http::Envelope<LoginData> = http::post_json("/auth/login", payload).await?;
    env.data
        .ok_or_else(|| ApiError::Decode("login response missing data".to_string()))
}

pub async fn logout() -> Result<(), ApiError> {
    http::post_empty("/auth/logout").await
}

// ========================
// Products
// ========================

pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    http::get_list("/products").await
}

pub async fn get_product(id: u32) -> Result<Product, ApiError> {
    http::get_one(&format!("/products/{id}")).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<(), ApiError> {
    http::post("/products", payload).await
}

pub async fn update_product(id: u32, payload: &ProductPayload) -> Result<(), ApiError> {
    http::put(&format!("/products/{id}"), payload).await
}

pub async fn delete_product(id: u32) -> Result<(), ApiError> {
    http::delete(&format!("/products/{id}")).await
}

/// Product statistic for the dashboard (`count`, else list length).
pub async fn count_products() -> Result<u64, ApiError> {
    Ok(http::get_envelope::<Product>("/products").await?.counted())
}

// ========================
// Categories
// ========================

pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    http::get_list("/categories").await
}

pub async fn get_category(id: u32) -> Result<Category, ApiError> {
    http::get_one(&format!("/categories/{id}")).await
}

pub async fn create_category(payload: &CategoryPayload) -> Result<(), ApiError> {
    http::post("/categories", payload).await
}

pub async fn update_category(id: u32, payload: &CategoryPayload) -> Result<(), ApiError> {
    http::put(&format!("/categories/{id}"), payload).await
}

pub async fn delete_category(id: u32) -> Result<(), ApiError> {
    http::delete(&format!("/categories/{id}")).await
}

// ========================
// Stocks
// ========================

pub async fn list_stocks() -> Result<Vec<StockEntry>, ApiError> {
    http::get_list("/stocks").await
}

pub async fn get_stock(id: u32) -> Result<StockEntry, ApiError> {
    http::get_one(&format!("/stocks/{id}")).await
}

pub async fn create_stock(payload: &NewStockEntry) -> Result<(), ApiError> {
    http::post("/stocks", payload).await
}

pub async fn update_stock(id: u32, payload: &NewStockEntry) -> Result<(), ApiError> {
    http::put(&format!("/stocks/{id}"), payload).await
}

pub async fn delete_stock(id: u32) -> Result<(), ApiError> {
    http::delete(&format!("/stocks/{id}")).await
}

// ========================
// Orders
// ========================

pub async fn list_orders() -> Result<Vec<Order>, ApiError> {
    http::get_list("/orders").await
}

pub async fn get_order(id: u32) -> Result<Order, ApiError> {
    http::get_one(&format!("/orders/{id}")).await
}

pub async fn create_order(payload: &OrderPayload) -> Result<(), ApiError> {
    http::post("/orders", payload).await
}

pub async fn update_order(id: u32, payload: &OrderPayload) -> Result<(), ApiError> {
    http::put(&format!("/orders/{id}"), payload).await
}

pub async fn delete_order(id: u32) -> Result<(), ApiError> {
    http::delete(&format!("/orders/{id}")).await
}

// ========================
// Transactions
// ========================

pub async fn list_transactions() -> Result<Vec<Transaction>, ApiError> {
    http::get_list("/transactions").await
}

pub async fn get_transaction(id: u32) -> Result<Transaction, ApiError> {
    http::get_one(&format!("/transactions/{id}")).await
}

pub async fn create_transaction(payload: &TransactionPayload) -> Result<(), ApiError> {
    http::post("/transactions", payload).await
}

pub async fn update_transaction(id: u32, payload: &TransactionPayload) -> Result<(), ApiError> {
    http::put(&format!("/transactions/{id}"), payload).await
}

pub async fn delete_transaction(id: u32) -> Result<(), ApiError> {
    http::delete(&format!("/transactions/{id}")).await
}

/// Transaction statistic for the dashboard.
pub async fn count_transactions() -> Result<u64, ApiError> {
    Ok(http::get_envelope::<Transaction>("/transactions")
        .await?
        .counted())
}

// ========================
// Users
// ========================

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    http::get_list("/users").await
}

pub async fn get_user(id: u32) -> Result<User, ApiError> {
    http::get_one(&format!("/users/{id}")).await
}

pub async fn update_user(id: u32, payload: &UserUpdate) -> Result<(), ApiError> {
    http::put(&format!("/users/{id}"), payload).await
}

pub async fn delete_user(id: u32) -> Result<(), ApiError> {
    http::delete(&format!("/users/{id}")).await
}

/// User statistic for the dashboard.
pub async fn count_users() -> Result<u64, ApiError> {
    Ok(http::get_envelope::<User>("/users").await?.counted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_update_serializes_underscore_wire_name() {
        let payload = UserUpdate {
            fullname: "Budi".to_string(),
            username: "budi".to_string(),
            email: "budi@toko.id".to_string(),
            role: "cashier".to_string(),
            is_active_disabled: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["_is_active_disabled"], serde_json::json!(true));
        assert!(value.get("is_active_disabled").is_none());
    }

    #[test]
    fn payloads_serialize_numbers_as_numbers() {
        let value = serde_json::to_value(ProductPayload {
            name: "Kemeja".to_string(),
            price: 150000,
            size: "M".to_string(),
            color: "Merah".to_string(),
            category: "clothing".to_string(),
        })
        .unwrap();
        assert_eq!(value["price"], serde_json::json!(150000));

        let value = serde_json::to_value(NewStockEntry {
            product_id: 3,
            quantity_change: -5,
            action: "keluar".to_string(),
        })
        .unwrap();
        assert_eq!(value["quantity_change"], serde_json::json!(-5));
    }
}
