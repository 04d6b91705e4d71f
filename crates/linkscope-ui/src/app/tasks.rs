//! Requests started by dashboard controls.
//!
//! Every task reads and writes the global [`AppStore`]; results land through
//! `reduce_mut` once the request resolves. `reduce_mut` returns nothing, so
//! values produced inside a reducer are carried out through a local.

use crate::app::ApiCtx;
use crate::core::store::AppStore;
use crate::models::ToastKind;
use gloo::console;
use linkscope_core::{SUBMIT_FAILED_NOTICE, UrlAction, UrlService, perform, perform_bulk};
use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

/// Fetch the list under a fresh ticket; stale responses are dropped on apply.
pub(crate) fn spawn_refresh(api: ApiCtx) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = Some(store.begin_refresh()));
    let Some(ticket) = ticket else {
        return;
    };
    spawn_local(async move {
        let result = api.client.list().await;
        if let Err(err) = &result {
            console::error!("list fetch failed", err.to_string());
        }
        dispatch.reduce_mut(|store| {
            store.dashboard.apply_fetch(ticket, result);
        });
    });
}

/// Run one row action and refresh when it succeeds.
pub(crate) fn spawn_action(api: ApiCtx, action: UrlAction, id: u64) {
    spawn_local(async move {
        match perform(api.client.as_ref(), action, id).await {
            Ok(()) => spawn_refresh(api),
            Err(err) => {
                console::error!("url action failed", action.as_str(), err.to_string());
                Dispatch::<AppStore>::new().reduce_mut(|store| {
                    store.push_toast(ToastKind::Error, action.failure_notice());
                });
            }
        }
    });
}

/// Run `action` for the whole selection, then refresh exactly once.
pub(crate) fn spawn_bulk(api: ApiCtx, action: UrlAction) {
    let dispatch = Dispatch::<AppStore>::new();
    let ids = dispatch.get().dashboard.view.selected_ids();
    if ids.is_empty() {
        return;
    }
    spawn_local(async move {
        let outcome = perform_bulk(api.client.as_ref(), action, &ids).await;
        dispatch.reduce_mut(|store| store.finish_bulk(action, &outcome));
        spawn_refresh(api);
    });
}

/// Submit the form input; duplicate submissions while busy are ignored.
pub(crate) fn spawn_submit(api: ApiCtx) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut request = None;
    dispatch.reduce_mut(|store| request = store.start_submission());
    let Some(request) = request else {
        return;
    };
    spawn_local(async move {
        match api.client.create(&request).await {
            Ok(_) => {
                dispatch.reduce_mut(|store| store.form.succeed());
                spawn_refresh(api);
            }
            Err(err) => {
                console::error!("submission failed", request.url.clone(), err.to_string());
                dispatch.reduce_mut(|store| {
                    store.form.fail();
                    store.push_toast(ToastKind::Error, SUBMIT_FAILED_NOTICE);
                });
            }
        }
    });
}
