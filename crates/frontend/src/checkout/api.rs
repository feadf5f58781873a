//! HTTP-клиент бэкенда оформления заказа

use contracts::checkout::{CheckoutSnapshotDto, Order, OrderId, SubmitOrderRequest};
use gloo_net::http::Request;

/// Базовый URL API по текущему расположению окна (бэкенд на порту 3000)
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Fetch the checkout snapshot (client, cart, addresses, payment methods)
pub async fn fetch_checkout() -> Result<CheckoutSnapshotDto, String> {
    let response = Request::get(&format!("{}/api/checkout", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch checkout data: {}", response.status()));
    }

    response
        .json::<CheckoutSnapshotDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit the order
pub async fn submit_order(request: SubmitOrderRequest) -> Result<Order, String> {
    let response = Request::post(&format!("{}/api/checkout/submit", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to submit order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single order by id
pub async fn fetch_order(id: &OrderId) -> Result<Order, String> {
    let response = Request::get(&format!("{}/api/orders/{}", api_base(), id.as_string()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
