pub mod memory;
pub mod metrics;
pub mod mongo;
pub mod probe;
pub mod store;

pub use memory::InMemoryMovieStore;
pub use metrics::{get_metrics, init_metrics, record_operation};
pub use mongo::MongoMovieStore;
pub use probe::ConnectionProbe;
pub use store::MovieStore;
