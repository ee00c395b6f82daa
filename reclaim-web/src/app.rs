use crate::api::ReclaimClient;
use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Application shell: seeds the session store once, then mounts the router.
#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ReclaimClient::shared();
                // No valid session is treated the same as insufficient role:
                // the settings gate denies both, so a failed profile fetch
                // just leaves the user unset.
                let user = client.get_profile().await.ok().map(|me| me.user);
                dispatch.set(AppState { booted: true, user });
            });
            || ()
        });
    }

    if !state.booted {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
