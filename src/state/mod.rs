mod manager;
mod persistence;
mod seed;

pub use manager::{Catalog, UserState};
pub use persistence::{
    import_catalog_csv, load_catalog, load_state, save_catalog, save_state,
};
pub use seed::default_catalog;
