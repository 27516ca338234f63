// Property proxies: assignment filtering and lazy initialisation

use std::cell::OnceCell;
use std::fmt;

use log::info;

/// Value wrapper that ignores no-op assignments and logs real ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Property<T> {
    value: T,
}

impl<T: PartialEq + fmt::Debug> Property<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns `true` when the stored value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        info!("Assigning value to {value:?}");
        self.value = value;
        true
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[derive(Debug, Clone, Default)]
pub struct Creature {
    agility: Property<i32>,
}

impl Creature {
    pub fn agility(&self) -> i32 {
        *self.agility.get()
    }

    pub fn set_agility(&mut self, value: i32) -> bool {
        self.agility.set(value)
    }
}

/// Value built with `T::default()` on first access, then reused.
#[derive(Debug, Default)]
pub struct LazyProperty<T> {
    cell: OnceCell<T>,
}

impl<T: Default> LazyProperty<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn value(&self) -> &T {
        self.cell.get_or_init(|| {
            info!("Initializing value...");
            T::default()
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[derive(Debug, Default)]
pub struct DataLoader {
    pub data: LazyProperty<Vec<String>>,
}
