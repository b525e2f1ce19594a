#![cfg(target_arch = "wasm32")]

//! Browser-side behavior tests.
//!
//! Run with `wasm-pack test --headless --chrome client/hooks`. The fake
//! hook context below stands in for the framework's hook object: `el` is a
//! detached element, `pushEvent` records into an array, `handleEvent`
//! records callbacks so tests can invoke them like the server would.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use lv_client_hooks::{AutoDismissNotification, HookContext, LoginSession};

wasm_bindgen_test_configure!(run_in_browser);

fn sleep(ms: i32) -> JsFuture {
    JsFuture::from(Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    }))
}

fn notification_ctx(el: &web_sys::Element) -> (HookContext, Array) {
    let pushed = Array::new();
    let ctx = Object::new();
    Reflect::set(&ctx, &"el".into(), el.as_ref()).unwrap();

    let sink = pushed.clone();
    let push_event =
        Closure::<dyn FnMut(JsValue, JsValue)>::new(move |name: JsValue, payload: JsValue| {
            sink.push(&Array::of2(&name, &payload));
        });
    Reflect::set(&ctx, &"pushEvent".into(), push_event.as_ref()).unwrap();
    push_event.forget();

    (ctx.unchecked_into(), pushed)
}

fn login_ctx() -> (HookContext, Object) {
    let handlers = Object::new();
    let ctx = Object::new();

    let sink = handlers.clone();
    let handle_event =
        Closure::<dyn FnMut(JsValue, Function)>::new(move |name: JsValue, callback: Function| {
            Reflect::set(&sink, &name, &callback).unwrap();
        });
    Reflect::set(&ctx, &"handleEvent".into(), handle_event.as_ref()).unwrap();
    handle_event.forget();

    (ctx.unchecked_into(), handlers)
}

fn handler(handlers: &Object, event: &str) -> Function {
    Reflect::get(handlers, &event.into())
        .unwrap()
        .unchecked_into()
}

fn jwt_payload(token: &str, max_age: f64) -> JsValue {
    let payload = Object::new();
    Reflect::set(&payload, &"token".into(), &token.into()).unwrap();
    Reflect::set(&payload, &"max_age".into(), &max_age.into()).unwrap();
    Reflect::set(&payload, &"http_only".into(), &false.into()).unwrap();
    Reflect::set(&payload, &"secure".into(), &false.into()).unwrap();
    payload.into()
}

fn document_cookies() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .unchecked_into::<web_sys::HtmlDocument>()
        .cookie()
        .unwrap()
}

#[wasm_bindgen_test]
async fn dismiss_fires_once_with_element_id() {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_attribute("data-id", "42").unwrap();

    let (ctx, pushed) = notification_ctx(&el);
    let _hook = AutoDismissNotification::mounted(ctx).unwrap();

    sleep(3200).await.unwrap();

    assert_eq!(pushed.length(), 1);
    let record = Array::from(&pushed.get(0));
    assert_eq!(
        record.get(0).as_string().as_deref(),
        Some("dismiss_notification")
    );
    let id = Reflect::get(&record.get(1), &"id".into()).unwrap();
    assert_eq!(id.as_string().as_deref(), Some("42"));

    // one-shot: nothing further fires
    sleep(3200).await.unwrap();
    assert_eq!(pushed.length(), 1);
}

#[wasm_bindgen_test]
async fn dismiss_forwards_null_for_missing_id() {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();

    let (ctx, pushed) = notification_ctx(&el);
    let _hook = AutoDismissNotification::mounted(ctx).unwrap();

    sleep(3200).await.unwrap();

    assert_eq!(pushed.length(), 1);
    let id = Reflect::get(&Array::from(&pushed.get(0)).get(1), &"id".into()).unwrap();
    assert!(id.is_null());
}

#[wasm_bindgen_test]
async fn destroy_before_expiry_suppresses_dismiss() {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_attribute("data-id", "7").unwrap();

    let (ctx, pushed) = notification_ctx(&el);
    let mut hook = AutoDismissNotification::mounted(ctx).unwrap();
    hook.destroyed();

    sleep(3200).await.unwrap();
    assert_eq!(pushed.length(), 0);
}

#[wasm_bindgen_test]
fn jwt_event_writes_cookie() {
    let (ctx, handlers) = login_ctx();
    let _hook = LoginSession::mounted(ctx).unwrap();

    let set_jwt = handler(&handlers, "set_jwt_cookie");
    set_jwt
        .call1(&JsValue::NULL, &jwt_payload("tok-1", 60.0))
        .unwrap();

    assert!(document_cookies().contains("jwt_token=tok-1"));
}

#[wasm_bindgen_test]
fn jwt_event_overwrites_previous_token() {
    let (ctx, handlers) = login_ctx();
    let _hook = LoginSession::mounted(ctx).unwrap();

    let set_jwt = handler(&handlers, "set_jwt_cookie");
    set_jwt
        .call1(&JsValue::NULL, &jwt_payload("stale", 60.0))
        .unwrap();
    set_jwt
        .call1(&JsValue::NULL, &jwt_payload("fresh", 60.0))
        .unwrap();

    let cookies = document_cookies();
    assert!(cookies.contains("jwt_token=fresh"));
    assert!(!cookies.contains("jwt_token=stale"));
}

#[wasm_bindgen_test]
fn jwt_event_rejects_malformed_payload() {
    let (ctx, handlers) = login_ctx();
    let _hook = LoginSession::mounted(ctx).unwrap();

    // missing max_age: rejected, no cookie written
    let payload = Object::new();
    Reflect::set(&payload, &"token".into(), &"half-baked".into()).unwrap();
    handler(&handlers, "set_jwt_cookie")
        .call1(&JsValue::NULL, &payload)
        .unwrap();

    assert!(!document_cookies().contains("half-baked"));
}

#[wasm_bindgen_test]
fn login_mount_registers_both_handlers() {
    let (ctx, handlers) = login_ctx();
    let _hook = LoginSession::mounted(ctx).unwrap();

    assert!(Reflect::get(&handlers, &"setCookieAuth".into())
        .unwrap()
        .is_function());
    assert!(Reflect::get(&handlers, &"set_jwt_cookie".into())
        .unwrap()
        .is_function());
}
