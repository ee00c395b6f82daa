use crate::{
    containers::layout::Layout,
    models::app_state::AppState,
    pages::{ErrorPage, SettingsPage},
};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

/// Resolves a route to its page, handing the session user to pages as an
/// explicit prop rather than letting them read ambient state.
#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let user_opt = (*user).clone();

    match props.route.clone() {
        MainRoute::Home => {
            html! { <Redirect<MainRoute> to={MainRoute::Settings} /> }
        }
        MainRoute::Settings => html! {
            <Layout current_user={user_opt.clone()}>
                <SettingsPage current_user={user_opt} />
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout current_user={user_opt}>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn route_paths_are_stable() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Settings.to_path(), "/settings");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn routes_recognize_their_paths() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/settings"), Some(MainRoute::Settings));
        assert_eq!(
            MainRoute::recognize("/does-not-exist"),
            Some(MainRoute::NotFound)
        );
    }

    #[test]
    fn route_enumeration_covers_all_pages() {
        assert_eq!(MainRoute::iter().count(), 3);
    }
}
