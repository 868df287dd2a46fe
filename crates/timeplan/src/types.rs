/// Shared application state
use crate::catalog::CatalogStore;
use crate::config::PlannerConfig;
use crate::db::PlannerDb;
use crate::schedule::ScheduleParser;

/// State shared by every API handler.
pub struct AppState {
    pub config: PlannerConfig,
    pub db: PlannerDb,
    pub parser: ScheduleParser,
    pub catalogs: CatalogStore,
}

impl AppState {
    pub fn new(config: PlannerConfig, db: PlannerDb) -> Self {
        let parser = ScheduleParser::new(config.period_table.clone());
        let catalogs = CatalogStore::new(config.catalog_dir.clone());
        AppState {
            config,
            db,
            parser,
            catalogs,
        }
    }
}
