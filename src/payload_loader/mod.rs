mod loader;

pub use loader::{LoaderError, PayloadReport, PayloadSummary, load_payloads_from};
