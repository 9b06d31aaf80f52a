use std::sync::Arc;

use crate::{catalog::Catalog, db::AccountStore};

/// Shared application state
///
/// The catalog is immutable after startup; the account store is the only
/// thing requests write to.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, accounts: Arc<dyn AccountStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            accounts,
        }
    }
}
