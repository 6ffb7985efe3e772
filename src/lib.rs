pub mod error;
pub mod observation;
pub mod opener;
pub mod output;
pub mod recorder;
pub mod shell;
pub mod stats;
pub mod store;
pub mod summary;
pub mod validate;

pub use error::{RecorderError, Severity};
pub use observation::Observation;
pub use recorder::{ExportReport, Recorder};
pub use store::RecordStore;
pub use summary::{Summary, Trend};
