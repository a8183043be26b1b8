pub mod browse;
pub mod latency;
pub mod preferences;
pub mod recommendations;
pub mod watch;

pub use browse::BrowseService;
pub use latency::SimulatedLatency;
pub use preferences::{InMemoryPreferenceStore, PreferenceStore, StoreLatency};
pub use recommendations::RecommendationService;
pub use watch::WatchService;
