//! Application shell: context, routing and mount.

use gloo::utils::document;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::features::labels::view::LabelPrintPage;
use crate::features::reset_password::view::ResetPasswordPage;
use routes::Route;

pub(crate) mod api;
mod routes;

#[function_component(WitApp)]
fn wit_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::from_page(), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <main class="min-h-screen bg-base-200 p-6">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::LabelPrint => html! { <LabelPrintPage /> },
        Route::ResetPassword { token } => html! { <ResetPasswordPage {token} /> },
        Route::ResetPasswordMissing => html! { <ResetPasswordPage /> },
        Route::NotFound => html! {
            <div class="panel">
                <p class="text-sm">{"Page not found."}</p>
            </div>
        },
    }
}

/// Mount the UI into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<WitApp>::with_root(root).render();
    } else {
        yew::Renderer::<WitApp>::new().render();
    }
}
