pub mod properties;

mod error;
mod table;

pub use error::SourceError;

pub use properties::CodepointEntry;
pub use properties::GeneralCategory;

pub use table::entries;
pub use table::read_table;
pub use table::Entries;
pub use table::LAST_CODEPOINT;
