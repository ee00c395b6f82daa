use shared::models::User;
use yewdux::Store;

/// Session state seeded once at startup from `GET /api/auth/me`.
///
/// The store is read at the routing layer and handed to pages as explicit
/// props; pages never reach into it themselves.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub booted: bool,
    pub user: Option<User>,
}
