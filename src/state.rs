/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::{product_repo::ProductStore, user_repo::UserStore};
use crate::services::auth::AuthenticationService;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductStore>,
    pub users: Arc<UserStore>,
    pub auth: Arc<AuthenticationService>,
}

impl AppState {
    pub fn new(auth: Arc<AuthenticationService>) -> Self {
        Self {
            products: Arc::new(ProductStore::new()),
            users: Arc::new(UserStore::new()),
            auth,
        }
    }
}
