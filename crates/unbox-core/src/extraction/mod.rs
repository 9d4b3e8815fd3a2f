//! Dispatching archives to format handlers, one at a time or in batches.

pub mod batch;
pub mod engine;

pub use batch::BatchItem;
pub use batch::BatchObserver;
pub use batch::NoopObserver;
pub use batch::Selection;
pub use engine::ExtractionEngine;
