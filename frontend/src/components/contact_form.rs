use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::lead::{dispatch_lead, ContactForm, LeadPayload, SECTORS};

const SUCCESS_HOLD_MS: u32 = 5000;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(MissionDispatch)]
pub fn mission_dispatch() -> Html {
    let form = use_state(|| ContactForm {
        sector: SECTORS[0].to_string(),
        ..ContactForm::default()
    });
    let sending = use_state(|| false);
    let submitted = use_state(|| false);
    // Dropping the handle cancels the pending reset, including on unmount.
    let success_timer = use_mut_ref(|| None::<Timeout>);

    let edit = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_name = edit(|f, v| f.name = v);
    let on_email = edit(|f, v| f.email = v);
    let on_phone = edit(|f, v| f.phone = v);
    let on_sector = edit(|f, v| f.sector = v);
    let on_message = edit(|f, v| f.message = v);

    let onsubmit = {
        let form = form.clone();
        let sending = sending.clone();
        let submitted = submitted.clone();
        let success_timer = success_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            sending.set(true);

            let payload = LeadPayload::from_form(&form, Utc::now());
            let form = form.clone();
            let sending = sending.clone();
            let submitted = submitted.clone();
            let success_timer = success_timer.clone();
            spawn_local(async move {
                match dispatch_lead(&payload).await {
                    Ok(()) => {
                        info!("Mission dispatched for sector {}", payload.sector);
                        form.set(ContactForm {
                            sector: SECTORS[0].to_string(),
                            ..ContactForm::default()
                        });
                        submitted.set(true);
                        let submitted = submitted.clone();
                        *success_timer.borrow_mut() =
                            Some(Timeout::new(SUCCESS_HOLD_MS, move || submitted.set(false)));
                    }
                    Err(e) => alert(e.alert_message()),
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="dispatch-panel">
            <h3>{"Mission Dispatch"}</h3>
            if *submitted {
                <div class="dispatch-success">
                    <div class="dispatch-success-icon">{"✓"}</div>
                    <h4>{"Transmission Received"}</h4>
                    <p>{"Ops command will follow up on this frequency shortly."}</p>
                </div>
            } else {
                <form class="dispatch-form" {onsubmit}>
                    <div class="dispatch-grid">
                        <div>
                            <label>{"Callsign (Name)"}</label>
                            <input
                                name="name"
                                required=true
                                type="text"
                                placeholder="e.g. Maverick"
                                value={form.name.clone()}
                                oninput={on_name.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                            />
                        </div>
                        <div>
                            <label>{"Frequency (Email)"}</label>
                            <input
                                name="email"
                                required=true
                                type="email"
                                placeholder="contact@ops.com"
                                value={form.email.clone()}
                                oninput={on_email.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                            />
                        </div>
                    </div>
                    <label>{"Frequency (Phone Number)"}</label>
                    <input
                        name="phone"
                        required=true
                        type="tel"
                        placeholder="e.g. (305) 555-0123"
                        value={form.phone.clone()}
                        oninput={on_phone.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                    />
                    <label>{"Sector (Business Type)"}</label>
                    <select
                        name="sector"
                        onchange={on_sector.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}
                    >
                        { for SECTORS.iter().map(|sector| html! {
                            <option selected={form.sector == *sector}>{*sector}</option>
                        }) }
                    </select>
                    <label>{"Briefing (Message)"}</label>
                    <textarea
                        name="message"
                        required=true
                        rows="4"
                        placeholder="Describe your scale targets..."
                        value={form.message.clone()}
                        oninput={on_message.reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value())}
                    />
                    <button type="submit" class="btn-primary btn-book-glow" disabled={*sending}>
                        if *sending {
                            <div class="spinner"></div>
                        } else {
                            <span>{"Initiate Dispatch"}</span>
                        }
                    </button>
                    <p class="dispatch-footnote">{"Secure Encryption Active // KFXE Protocol"}</p>
                </form>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_the_blank_dispatch_form() {
        let html = yew::ServerRenderer::<MissionDispatch>::new().render().await;

        assert!(html.contains("Mission Dispatch"));
        assert!(html.contains("Initiate Dispatch"));
        assert!(!html.contains("Transmission Received"));
        for name in ["name", "email", "phone", "sector", "message"] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name} field");
        }
        for sector in SECTORS {
            assert!(html.contains(sector), "missing sector {sector}");
        }
    }
}
