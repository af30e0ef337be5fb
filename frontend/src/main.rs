use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod context;
mod motion {
    pub mod velocity;
    pub mod reveal;
    pub mod count_up;
    pub mod widgets;
    pub mod clock;
}
mod strategy {
    pub mod model;
    pub mod error;
    pub mod prompt;
    pub mod transport;
    pub mod requester;
}
mod contact {
    pub mod lead;
}
mod components {
    pub mod reveal;
    pub mod count_up;
    pub mod radar;
    pub mod tactical_hud;
    pub mod air_traffic;
    pub mod pipeline_steps;
    pub mod copilot;
    pub mod contact_form;
    pub mod layout;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod results;
    pub mod about;
    pub mod contact;
    pub mod privacy;
    pub mod not_found;
}

use pages::{
    home::Home,
    services::Services,
    results::Results,
    about::About,
    contact::Contact,
    privacy::PrivacyPolicy,
    not_found::NotFound,
};

use components::{
    air_traffic::AirTrafficFeed,
    copilot::StrategyCopilot,
    layout::Footer,
    reveal::RevealProvider,
};
use context::{apply_theme, load_theme, AppAction, AppContext, AppState};

/// Nav bar turns solid once the page has scrolled this far.
const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/results")]
    Results,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Services, "Services"),
    (Route::Results, "Results"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Results => {
            info!("Rendering Results page");
            html! { <Results /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering fallback page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let app = use_context::<AppContext>();
    let theme = app.as_ref().map(|app| app.theme).unwrap_or_default();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_y > NAV_SCROLL_THRESHOLD_PX);
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let toggle_theme = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(app) = app.as_ref() {
                app.dispatch(AppAction::ToggleTheme);
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", format!("top-nav-{}", theme.as_str()), (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <img src={theme.logo_src()} alt="Stratus Marketing" class="nav-logo-img" />
                        <div>
                            <div class="nav-logo-title">{"STRATUS MARKETING"}</div>
                            <div class="nav-logo-tagline">{"Aviation First Performance Marketing"}</div>
                        </div>
                    </Link<Route>>
                </div>

                <button class="theme-toggle" onclick={toggle_theme} title="Toggle theme">
                    { theme.pick("☀", "☾") }
                </button>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <a href={config::CALENDLY_LINK} target="_blank" rel="noopener noreferrer" class="nav-book-button btn-book-glow">
                        {"Book Now"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let app = use_reducer(|| AppState {
        theme: load_theme(),
        ..AppState::default()
    });

    {
        let theme = app.theme;
        use_effect_with_deps(move |theme| {
            apply_theme(*theme);
            || ()
        }, theme);
    }

    html! {
        <ContextProvider<AppContext> context={app.clone()}>
            <RevealProvider>
                <BrowserRouter>
                    <div class={classes!("app-shell", format!("app-shell-{}", app.theme.as_str()))}>
                        <div class="bg-glow bg-glow-top"></div>
                        <div class="bg-glow bg-glow-bottom"></div>
                        <AirTrafficFeed />
                        <Nav />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                        <StrategyCopilot />
                    </div>
                </BrowserRouter>
            </RevealProvider>
        </ContextProvider<AppContext>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
