use crate::role_router::LoginRoleRouter;

pub struct AppState {
    pub role_router: LoginRoleRouter,
}
