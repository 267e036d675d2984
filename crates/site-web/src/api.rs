//! API Client
//!
//! The one network call this site makes: creating a checkout session.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Serialize)]
struct CheckoutPayload<'a> {
    #[serde(rename = "priceId")]
    price_id: &'a str,

    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    referral: Option<String>,
}

/// Start a Stripe checkout: create a session through the backend, then
/// navigate the browser to the hosted page.
///
/// Every failure ends in a blocking alert; this function never panics.
pub async fn checkout(price_id: &str, referral: Option<String>) {
    match create_session(price_id, referral).await {
        Ok(Some(url)) => {
            fire_checkout_event(price_id);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        Ok(None) => {
            leptos::logging::warn!("Checkout succeeded but no redirect URL was provided.");
            alert("Checkout initiated successfully! Please check your console for details.");
        }
        Err(message) => {
            leptos::logging::error!("Checkout error: {message}");
            alert(&format!("Checkout failed: {message}"));
        }
    }
}

/// POST to the checkout endpoint. `Ok(None)` means the server answered
/// with a success status but no usable redirect URL (empty and
/// unparseable bodies included — those are "no data", not errors).
async fn create_session(
    price_id: &str,
    referral: Option<String>,
) -> Result<Option<String>, String> {
    let client = reqwest::Client::new();

    let response = client
        .post("/api/checkout")
        .json(&CheckoutPayload { price_id, referral })
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        // Prefer the structured error, then the raw body, then the status.
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|data| data["error"].as_str().map(str::to_string))
            .filter(|msg| !msg.is_empty())
            .or_else(|| (!text.is_empty()).then(|| text.clone()))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        return Err(message);
    }

    let data = response
        .json::<serde_json::Value>()
        .await
        .unwrap_or_default();
    Ok(data["url"].as_str().map(str::to_string))
}

/// Report the checkout click to Plausible, if its script is on the page
fn fire_checkout_event(price_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(plausible) = js_sys::Reflect::get(&window, &JsValue::from_str("plausible")) else {
        return;
    };
    let Some(plausible) = plausible.dyn_ref::<js_sys::Function>() else {
        return;
    };

    let props = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &props,
        &JsValue::from_str("priceId"),
        &JsValue::from_str(price_id),
    );
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("props"), &props);

    let _ = plausible.call2(&window, &JsValue::from_str("StripeCheckout"), &options);
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
