pub mod import;
pub mod journal;

pub use import::ImportLogic;
pub use journal::Journal;
