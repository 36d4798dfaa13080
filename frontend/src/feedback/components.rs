use crate::config::CONFIRMATION_HIDE_MS;
use crate::feedback::api::submit_feedback;
use crate::models::FeedbackForm;
use crate::services::AppServices;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const CATEGORIES: [(&str, &str); 3] = [
    ("general", "一般"),
    ("bug", "不具合報告"),
    ("suggestion", "改善提案"),
];

fn blank_form() -> FeedbackForm {
    FeedbackForm {
        category: CATEGORIES[0].0.to_string(),
        ..Default::default()
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::error!("Failed to show alert: {}", message);
        }
    }
}

#[function_component(FeedbackPanel)]
pub fn feedback_panel() -> Html {
    let services = use_context::<AppServices>();
    let form = use_state(blank_form);
    let submitting = use_state(|| false);
    let confirmed = use_state(|| false);
    let hide_timer = use_state(|| None::<Timeout>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.name = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(next);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.email = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(next);
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.category = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let confirmed = confirmed.clone();
        let hide_timer = hide_timer.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                log::error!("Feedback form rendered without AppServices context");
                return;
            };

            let form = form.clone();
            let submitting = submitting.clone();
            let confirmed = confirmed.clone();
            let hide_timer = hide_timer.clone();
            let payload = (*form).clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = submit_feedback(&*services.transport, &*services.csrf, &payload).await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        confirmed.set(true);
                        form.set(blank_form());
                        let confirmed = confirmed.clone();
                        hide_timer.set(Some(Timeout::new(CONFIRMATION_HIDE_MS, move || {
                            confirmed.set(false);
                        })));
                        // Fetch the next token up front for the following submission.
                        if services.csrf.acquire().await.is_none() {
                            log::warn!("Could not fetch a fresh CSRF token after submission");
                        }
                    }
                    Err(e) => {
                        log::error!("Feedback submission failed: {}", e);
                        alert(e.alert_message());
                    }
                }
            });
        })
    };

    html! {
        <div class="feedback">
            <h2>{ "ご意見・ご要望" }</h2>
            <form id="feedbackForm" onsubmit={on_submit}>
                <label for="name">{ "お名前" }</label>
                <input id="name" type="text" value={form.name.clone()} oninput={on_name} />

                <label for="email">{ "メールアドレス" }</label>
                <input id="email" type="email" value={form.email.clone()} oninput={on_email} />

                <label for="category">{ "種類" }</label>
                <select id="category" onchange={on_category}>
                    { for CATEGORIES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.category == *value}>{ *label }</option>
                    })}
                </select>

                <label for="message">{ "メッセージ" }</label>
                <textarea id="message" required={true} value={form.message.clone()} oninput={on_message} />

                <button type="submit" disabled={*submitting}>
                    { if *submitting { "送信中..." } else { "送信" } }
                </button>
            </form>
            {
                if *confirmed {
                    html! { <p id="responseMessage">{ "送信しました。ありがとうございました。" }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
