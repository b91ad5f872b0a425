pub mod d001_catalog_overview;

pub use d001_catalog_overview::ui::CatalogOverviewDashboard;
