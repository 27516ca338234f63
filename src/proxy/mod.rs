//! Proxy pattern: objects that stand in for other objects and add
//! access control, logging, laziness or a different memory layout.

pub mod logged;
pub mod masonry;
pub mod operator;
pub mod problem;
pub mod property;
pub mod protection;
pub mod soa;
pub mod value;
pub mod view_model;

pub use logged::{Account, BankAccount, Logged};
pub use masonry::MasonrySettings;
pub use operator::{Operator, OperatorAssignments, TwoBitSet};
pub use problem::{solve, solve_range, Problem};
pub use property::{Creature, DataLoader, LazyProperty, Property};
pub use protection::{Car, CarProxy, Drive, Driver};
pub use soa::{CreatureMut, CreatureRecord, CreatureRef, Creatures};
pub use value::Percentage;
pub use view_model::{Person, PersonViewModel};
