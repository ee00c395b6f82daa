use shared::models::User;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_user: Option<User>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "dark")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    let session_badge = props.current_user.as_ref().map_or_else(
        || html! { <span class="text-sm text-base-content/60">{"Not signed in"}</span> },
        |user| {
            html! {
                <span class="text-sm">
                    { user.username.clone() }
                    <span class="badge badge-outline badge-sm ml-2">{ user.role.label() }</span>
                </span>
            }
        },
    );

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <nav class="navbar justify-between bg-base-300">
                <a class="btn btn-ghost text-lg">
                    <i class="fa-solid fa-recycle text-primary mr-2"></i>
                    {"Reclaim"}
                </a>
                <div class="px-4">{ session_badge }</div>
            </nav>
            <main class="flex-grow p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2026 Reclaim · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    }
}
