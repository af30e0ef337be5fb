use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::context::use_theme;
use crate::Route;

/// Scrolls the window back to the top once, when the page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[function_component(SectionCta)]
pub fn section_cta() -> Html {
    let theme = use_theme();
    html! {
        <section class="section-cta">
            <div class={classes!("cta-panel", theme.pick("cta-panel-dark", "cta-panel-light"))}>
                <div class="cta-glow"></div>
                <div class="cta-copy">
                    <h2>{"Ready to Scale?"}</h2>
                    <p>{"Deploy a precision-engineered marketing system designed for operators who demand consistent utilization and growth."}</p>
                </div>
                <a href={config::CALENDLY_LINK} target="_blank" rel="noopener noreferrer" class="btn-primary btn-book-glow cta-button">
                    <span>{"BOOK YOUR STRATEGY CALL"}</span>
                    <span class="cta-arrow">{"→"}</span>
                </a>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme = use_theme();
    html! {
        <footer class={classes!("site-footer", format!("site-footer-{}", theme.as_str()))}>
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src={theme.logo_src()} alt="Stratus Marketing" class="footer-logo" />
                    <div class="footer-title">{"STRATUS MARKETING"}</div>
                    <div class="footer-tagline">{"Aviation First"}</div>
                    <p>{"Acquisition engine designed for operators running serious service-based businesses."}</p>
                    <div class="footer-social">
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" title="LinkedIn">{"in"}</a>
                        <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer" title="Facebook">{"f"}</a>
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" title="Instagram">{"ig"}</a>
                    </div>
                </div>
                <div>
                    <h5>{"Modules"}</h5>
                    <ul>
                        <li><Link<Route> to={Route::Services}>{"The Protocol"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Results}>{"Case Studies"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h5>{"Dispatch"}</h5>
                    <ul>
                        <li>{config::CONTACT_PHONE}</li>
                        <li>{config::CONTACT_EMAIL}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-copyright">{"© 2025 Stratus Marketing LLC"}</div>
        </footer>
    }
}
