use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ActivityService, CatalogService};
use crate::domain::repositories::ActivityStore;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub catalog: Arc<CatalogService>,
    pub activity: Arc<ActivityService>,
    // Kept alongside the services for the health endpoint's probes.
    pub cache: Arc<dyn CacheService>,
    pub activity_store: Arc<dyn ActivityStore>,
    pub session_secret: String,
    pub list_page_size: usize,
}
