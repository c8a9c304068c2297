use std::sync::Arc;

use crate::auth::token::TokenKeys;
use crate::config::SuperAdminConfig;
use crate::db::OrmConn;

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub tokens: Arc<TokenKeys>,
    pub super_admin: Arc<SuperAdminConfig>,
}
