pub use article::*;
pub use dashboard::*;

pub mod ingest;

mod article;
mod dashboard;
