use crate::app::ApiCtx;
use crate::app::tasks::spawn_submit;
use crate::core::store::AppStore;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct UrlFormProps {
    pub api: ApiCtx,
}

#[function_component(UrlForm)]
pub(crate) fn url_form(props: &UrlFormProps) -> Html {
    let form = use_selector(|store: &AppStore| store.form.clone());
    let on_input = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let value = input.value();
            Dispatch::<AppStore>::new().reduce_mut(|store| store.form.set_input(value));
        }
    });
    let on_submit = {
        let api = props.api.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            spawn_submit(api.clone());
        })
    };

    html! {
        <form class="url-form" onsubmit={on_submit}>
            <input
                type="text"
                class="input"
                placeholder="http://example.com"
                value={form.input.clone()}
                oninput={on_input}
            />
            <button type="submit" class="btn btn-primary" disabled={form.busy}>
                {form.button_label()}
            </button>
        </form>
    }
}
