//! Browser identity provider glue. The provider's script installs a global
//! `Clerk` object; this module only reads from it.

use api_client::TokenProvider;
use async_trait::async_trait;
use dioxus::{logger::tracing, prelude::*};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const SESSION_POLL_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq)]
pub struct SignedInUser {
    pub id: String,
    pub display_name: String,
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!("identity provider error: {:?}", value)
}

/// Walks `globalThis.<path...>`; `None` when any step is missing.
fn global_property(path: &[&str]) -> Option<JsValue> {
    let mut value: JsValue = js_sys::global().into();
    for key in path {
        value = Reflect::get(&value, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
    }
    Some(value)
}

fn string_property(path: &[&str]) -> Option<String> {
    global_property(path).and_then(|v| v.as_string()).filter(|s| !s.trim().is_empty())
}

/// Bearer tokens from the active browser session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClerkSession;

#[async_trait(?Send)]
impl TokenProvider for ClerkSession {
    async fn token(&self) -> anyhow::Result<Option<String>> {
        let Some(session) = global_property(&["Clerk", "session"]) else {
            return Ok(None);
        };
        let get_token: Function = Reflect::get(&session, &JsValue::from_str("getToken"))
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        let promise: Promise = get_token.call0(&session).map_err(js_error)?.dyn_into().map_err(js_error)?;
        let token = JsFuture::from(promise).await.map_err(js_error)?;
        Ok(token.as_string())
    }
}

pub fn signed_in_user() -> Option<SignedInUser> {
    let id = string_property(&["Clerk", "user", "id"])?;
    let display_name = string_property(&["Clerk", "user", "fullName"])
        .or_else(|| string_property(&["Clerk", "user", "username"]))
        .unwrap_or_else(|| "Signed in".to_string());
    Some(SignedInUser { id, display_name })
}

/// Asks the provider to show its sign-in modal. Does nothing if the
/// provider script has not loaded.
pub fn open_sign_in() {
    let Some(clerk) = global_property(&["Clerk"]) else {
        tracing::warn!("sign-in requested before the identity provider loaded");
        return;
    };
    let open = Reflect::get(&clerk, &JsValue::from_str("openSignIn")).ok().and_then(|f| f.dyn_into::<Function>().ok());
    if let Some(open) = open {
        if let Err(e) = open.call0(&clerk) {
            tracing::error!("failed to open sign-in: {:?}", e);
        }
    }
}

#[derive(Clone, Copy)]
pub struct CurrentUser(pub ReadSignal<Option<SignedInUser>>);

/// Tracks the signed-in user. The provider script loads and signs in
/// asynchronously, so the session is polled.
pub fn use_current_user_provider() -> CurrentUser {
    let mut user = use_signal(signed_in_user);
    use_hook(move || {
        spawn(async move {
            loop {
                TimeoutFuture::new(SESSION_POLL_MS).await;
                let latest = signed_in_user();
                if *user.peek() != latest {
                    tracing::info!("session changed: {:?}", latest.as_ref().map(|u| &u.id));
                    user.set(latest);
                }
            }
        })
    });
    use_context_provider(|| CurrentUser(user.into()))
}

pub fn use_current_user() -> ReadSignal<Option<SignedInUser>> {
    use_context::<CurrentUser>().0
}
