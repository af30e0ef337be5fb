use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::use_scroll_to_top;
use crate::config;
use crate::context::use_theme;
use crate::Route;

const SECTIONS: &[(&str, &str, &[&str])] = &[
    (
        "Information We Collect",
        "We collect information that you provide to us directly. This may include:",
        &[
            "Personal identification information (Name, email address, phone number, etc.)",
            "Business information (Company name, job title, etc.)",
            "Payment information (for service purchases)",
            "Any other information you choose to provide",
        ],
    ),
    (
        "How We Use Your Information",
        "We use the information we collect for various purposes, including:",
        &[
            "To provide and maintain our services",
            "To notify you about changes to our services",
            "To provide customer support",
            "To monitor the usage of our services",
            "To detect, prevent and address technical issues",
        ],
    ),
    (
        "Information Sharing",
        "We do not share your personal information with third parties except as described in this policy. We may disclose your personal information:",
        &[
            "To service providers who perform services on our behalf",
            "To comply with legal obligations",
            "To protect and defend our rights and property",
        ],
    ),
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_scroll_to_top();
    let theme = use_theme();

    html! {
        <div class={classes!("legal-page", theme.pick("panel-dark", "panel-light"))}>
            <header class="legal-header">
                <div class="eyebrow"><span>{"Operational Directive"}</span></div>
                <h2 class="page-title">{"Privacy Protocol"}</h2>
                <p>{"Last Calibration: January 2026"}</p>
            </header>
            <section>
                <p>{"This Privacy Policy explains how Stratus Marketing LLC (\"Stratus\", \"we\", \"our\", or \"us\") collects, uses, and protects your information when you visit our website or use our services."}</p>
            </section>
            { for SECTIONS.iter().map(|(title, intro, items)| html! {
                <section class="legal-section">
                    <h3><span class="legal-marker"></span>{*title}</h3>
                    <p>{*intro}</p>
                    <ul>
                        { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </section>
            }) }
            <div class="legal-callout">
                {"No mobile information will be shared with third parties/affiliates for marketing/promotional purposes. All other categories exclude text messaging originator opt-in data and consent; this information will not be shared with any third parties."}
            </div>
            <section class="legal-section">
                <h3><span class="legal-marker"></span>{"Contact Sector Base"}</h3>
                <p>{"If you have any questions about this Privacy Policy, contact us at:"}</p>
                <div class="legal-contact">
                    <span>{ format!("Email: {}", config::CONTACT_EMAIL) }</span>
                    <span>{ format!("Phone: {}", config::CONTACT_PHONE) }</span>
                </div>
            </section>
            <Link<Route> to={Route::Home} classes="btn-ghost">
                {"← Return to Sector Base"}
            </Link<Route>>
        </div>
    }
}
