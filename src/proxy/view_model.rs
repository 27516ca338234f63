// View model: a proxy over `Person` that announces property changes

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const FULL_NAME: &str = "full_name";

type Listener = Box<dyn FnMut(&str)>;

/// Wraps a `Person`; every effective change notifies subscribers with the
/// property name, followed by `full_name`.
pub struct PersonViewModel {
    person: Person,
    listeners: Vec<Listener>,
}

impl PersonViewModel {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, property: &str) {
        for listener in &mut self.listeners {
            listener(property);
        }
    }

    pub fn first_name(&self) -> &str {
        &self.person.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.person.last_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.person.first_name == value {
            return;
        }
        self.person.first_name = value;
        self.notify(FIRST_NAME);
        self.notify(FULL_NAME);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.person.last_name == value {
            return;
        }
        self.person.last_name = value;
        self.notify(LAST_NAME);
        self.notify(FULL_NAME);
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.person.first_name, self.person.last_name)
            .trim()
            .to_string()
    }

    /// First word becomes the first name, the rest (possibly several words) the last name.
    /// Blank input clears both.
    pub fn set_full_name(&mut self, value: &str) {
        if value.trim().is_empty() {
            self.set_first_name(String::new());
            self.set_last_name(String::new());
            return;
        }
        let (first, last) = value.split_once(' ').unwrap_or((value, ""));
        self.set_first_name(first);
        self.set_last_name(last);
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Debug for PersonViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonViewModel")
            .field("person", &self.person)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
