use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h2>{"Section under final calibration."}</h2>
            <Link<Route> to={Route::Home} classes="btn-ghost">
                {"Return to Sector Base"}
            </Link<Route>>
        </section>
    }
}
