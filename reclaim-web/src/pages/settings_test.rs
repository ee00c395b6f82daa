use wasm_bindgen_test::*;

use shared::models::{User, UserRole};
use uuid::Uuid;
use yew::LocalServerRenderer;

use super::settings::{SettingsPage, SettingsPageProps};

wasm_bindgen_test_configure!(run_in_browser);

fn session_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        username: "thandi".to_string(),
        role,
        active: true,
    }
}

async fn render_settings(current_user: Option<User>) -> String {
    LocalServerRenderer::<SettingsPage>::with_props(SettingsPageProps { current_user })
        .hydratable(false)
        .render()
        .await
}

#[wasm_bindgen_test]
async fn absent_session_sees_only_the_denial_alert() {
    let rendered = render_settings(None).await;

    assert!(rendered.contains("Access Denied"));
    assert!(!rendered.contains("System Settings"));
    assert!(!rendered.contains("Role Configuration"));
    assert!(!rendered.contains("EPR Reporting"));
}

#[wasm_bindgen_test]
async fn non_admin_roles_see_only_the_denial_alert() {
    for role in [UserRole::Operator, UserRole::Manager, UserRole::Auditor] {
        let rendered = render_settings(Some(session_user(role))).await;

        assert!(rendered.contains("Access Denied"));
        assert!(!rendered.contains("Role Configuration"));
        assert!(!rendered.contains("EPR Reporting"));
    }
}

#[wasm_bindgen_test]
async fn admin_session_sees_both_tabs() {
    let rendered = render_settings(Some(session_user(UserRole::Admin))).await;

    assert!(!rendered.contains("Access Denied"));
    assert!(rendered.contains("System Settings"));
    assert!(rendered.contains("Role Configuration"));
    assert!(rendered.contains("EPR Reporting"));
}
