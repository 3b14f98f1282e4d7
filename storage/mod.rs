pub mod feature_store;
pub mod loader;
pub mod note_registry;
pub mod region;

pub use feature_store::{Feature, FeatureStore};
pub use loader::{load_features, DatasetFormat};
pub use note_registry::{NoteRegistry, RegistryStats, RouteNote};
pub use region::{in_region, list_in_region};
