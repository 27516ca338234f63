//! Flyweight pattern: share repeated data between many small objects.

pub mod interner;
pub mod text;
pub mod user;

pub use interner::StringTable;
pub use text::{FormattedText, RangeFormattedText, TextRange};
pub use user::{compare_memory, random_names, total_index_count, MemoryComparison, NaiveUser, User};
