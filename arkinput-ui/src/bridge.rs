//! Desktop Host Bridge
//!
//! Typed wrappers around the desktop host's `invoke` channel.

use js_sys::{Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::dto::{DailyStats, InputRecord, SearchFilter, Settings};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// Not running inside the desktop shell
    #[error("desktop bridge unavailable: {0}")]
    Unavailable(String),

    #[error("invoke {command} failed: {message}")]
    Invoke { command: String, message: String },

    /// The host rejected the command, usually with its own error string
    #[error("{command}: {message}")]
    Rejected { command: String, message: String },

    #[error("could not decode {command} response: {message}")]
    Decode { command: String, message: String },
}

impl BridgeError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BridgeError::Unavailable(_))
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn invoke_fn() -> BridgeResult<(JsValue, Function)> {
    let window =
        web_sys::window().ok_or_else(|| BridgeError::Unavailable("window not available".into()))?;
    let tauri = lookup(&window, "__TAURI__")
        .ok_or_else(|| BridgeError::Unavailable("__TAURI__ is not defined".into()))?;

    // v2 exposes core.invoke, v1 exposes tauri.invoke or a top-level invoke
    for namespace in ["core", "tauri"] {
        if let Some(ns) = lookup(&tauri, namespace) {
            if let Some(invoke) = lookup(&ns, "invoke").filter(JsValue::is_function) {
                return Ok((ns, invoke.unchecked_into::<Function>()));
            }
        }
    }
    if let Some(invoke) = lookup(&tauri, "invoke").filter(JsValue::is_function) {
        return Ok((tauri, invoke.unchecked_into::<Function>()));
    }

    Err(BridgeError::Unavailable("no invoke function available".into()))
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Invoke `command` with `args` and decode the result
pub async fn call<A, R>(command: &str, args: &A) -> BridgeResult<R>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let (this_obj, invoke) = invoke_fn()?;
    let args = args
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BridgeError::Invoke {
            command: command.to_string(),
            message: e.to_string(),
        })?;
    let js = invoke
        .call2(&this_obj, &JsValue::from_str(command), &args)
        .map_err(|e| BridgeError::Invoke {
            command: command.to_string(),
            message: js_message(&e),
        })?;
    let value = JsFuture::from(Promise::from(js))
        .await
        .map_err(|e| BridgeError::Rejected {
            command: command.to_string(),
            message: js_message(&e),
        })?;
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Decode {
        command: command.to_string(),
        message: e.to_string(),
    })
}

pub async fn fetch_today_stats() -> BridgeResult<DailyStats> {
    call("get_today_stats", &serde_json::json!({})).await
}

pub async fn fetch_records(filter: &SearchFilter) -> BridgeResult<Vec<InputRecord>> {
    call("get_records", &serde_json::json!({ "filter": filter })).await
}

pub async fn fetch_app_list() -> BridgeResult<Vec<String>> {
    call("get_app_list", &serde_json::json!({})).await
}

/// Delete records older than `before_date` (`YYYY-MM-DD`), returning the count removed
pub async fn delete_old_records(before_date: &str) -> BridgeResult<usize> {
    call(
        "delete_old_records",
        &serde_json::json!({ "beforeDate": before_date }),
    )
    .await
}

pub async fn fetch_settings() -> BridgeResult<Settings> {
    call("get_settings", &serde_json::json!({})).await
}

pub async fn save_settings(settings: &Settings) -> BridgeResult<()> {
    call("save_settings", &serde_json::json!({ "settings": settings })).await
}

/// Export records matching `filter` as pretty-printed JSON
pub async fn export_records(filter: &SearchFilter) -> BridgeResult<String> {
    call("export_records", &serde_json::json!({ "filter": filter })).await
}
