use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Catch-all page for unknown routes.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center gap-4 p-16 text-center">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Settings} classes="btn btn-primary">
                {"Back to settings"}
            </Link<MainRoute>>
        </div>
    }
}
