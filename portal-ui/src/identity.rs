//! Binding to the Google Identity Services widget (`google.accounts.id`),
//! resolved through `Reflect` since the script is loaded by the page.

use js_sys::{Function, Reflect};
use portal_core::error::IdentityError;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Serialize)]
struct InitOptions<'a> {
    client_id: &'a str,
    auto_select: bool,
}

#[derive(Serialize)]
struct ButtonOptions {
    theme: &'static str,
    size: &'static str,
    width: &'static str,
}

fn widget_err(what: &str) -> IdentityError {
    IdentityError::Widget(what.to_string())
}

fn id_namespace() -> Result<JsValue, IdentityError> {
    let window = web_sys::window().ok_or_else(|| widget_err("window not available"))?;
    ["google", "accounts", "id"]
        .into_iter()
        .try_fold(JsValue::from(window), |obj, key| {
            let next = Reflect::get(&obj, &JsValue::from_str(key))
                .map_err(|_| widget_err(&format!("failed to access {key}")))?;
            if next.is_undefined() || next.is_null() {
                Err(widget_err(&format!("{key} is not loaded")))
            } else {
                Ok(next)
            }
        })
}

fn method(ns: &JsValue, name: &str) -> Result<Function, IdentityError> {
    let v = Reflect::get(ns, &JsValue::from_str(name))
        .map_err(|_| widget_err(&format!("failed to access google.accounts.id.{name}")))?;
    if v.is_function() {
        Ok(v.unchecked_into::<Function>())
    } else {
        Err(widget_err(&format!("google.accounts.id.{name} is not a function")))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, IdentityError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| IdentityError::Widget(e.to_string()))
}

/// Initializes the widget and draws its button into `container`.
/// `on_credential` receives the raw credential string on every sign-in.
pub fn initialize(
    client_id: &str,
    container: &web_sys::HtmlElement,
    on_credential: impl Fn(String) + 'static,
) -> Result<(), IdentityError> {
    let ns = id_namespace()?;
    let init = method(&ns, "initialize")?;
    let render_button = method(&ns, "renderButton")?;

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        match Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string())
        {
            Some(token) => on_credential(token),
            None => log::error!("sign-in callback carried no credential"),
        }
    });

    let options = to_js(&InitOptions {
        client_id,
        auto_select: true,
    })?;
    Reflect::set(&options, &JsValue::from_str("callback"), callback.as_ref())
        .map_err(|_| widget_err("failed to attach sign-in callback"))?;
    init.call1(&ns, &options)
        .map_err(|e| IdentityError::Widget(format!("initialize failed: {e:?}")))?;
    // The widget holds the callback for the lifetime of the page.
    callback.forget();

    let button = to_js(&ButtonOptions {
        theme: "outline",
        size: "large",
        width: "300",
    })?;
    let target: &JsValue = container.as_ref();
    render_button
        .call2(&ns, target, &button)
        .map_err(|e| IdentityError::Widget(format!("renderButton failed: {e:?}")))?;
    Ok(())
}
