// Flyweight: users whose names live in a shared string table

use itertools::Itertools;
use rand::distributions::Alphanumeric;
use rand::Rng;

use super::interner::StringTable;
use crate::error::Result;

const NAME_DELIMITER: char = ' ';

/// Baseline user that owns its full name.
#[derive(Debug, Clone)]
pub struct NaiveUser {
    full_name: String,
}

impl NaiveUser {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Bytes of name text in use, counted by length like [`StringTable::heap_bytes`].
    pub fn heap_bytes(&self) -> usize {
        self.full_name.len()
    }
}

/// User whose name parts are indices into a [`StringTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    names: Box<[usize]>,
}

impl User {
    pub fn new(full_name: &str, table: &mut StringTable) -> Self {
        Self {
            names: table.decompose(full_name, NAME_DELIMITER).into_boxed_slice(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.names
    }

    pub fn full_name(&self, table: &StringTable) -> Result<String> {
        table.reconstruct(&self.names, NAME_DELIMITER)
    }

    /// `Indexes: 0, 1 → FullName: John Doe`
    pub fn debug_line(&self, table: &StringTable) -> Result<String> {
        Ok(format!(
            "Indexes: {} → FullName: {}",
            self.names.iter().join(", "),
            self.full_name(table)?
        ))
    }

    /// Bytes of index data in use.
    pub fn heap_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.names)
    }
}

/// Number of table references held across all `users`.
pub fn total_index_count(users: &[User]) -> usize {
    users.iter().map(|user| user.names.len()).sum()
}

/// Heap usage of the naive and flyweight models for the same population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryComparison {
    pub users: usize,
    pub naive_bytes: usize,
    pub flyweight_bytes: usize,
    pub table_entries: usize,
}

/// Builds `first_names × last_names` users both ways and measures them.
pub fn compare_memory(first_names: &[String], last_names: &[String]) -> MemoryComparison {
    let mut naive = Vec::with_capacity(first_names.len() * last_names.len());
    let mut table = StringTable::new();
    let mut users = Vec::with_capacity(naive.capacity());

    for (first, last) in first_names.iter().cartesian_product(last_names) {
        let full = format!("{first}{NAME_DELIMITER}{last}");
        users.push(User::new(&full, &mut table));
        naive.push(NaiveUser::new(full));
    }

    MemoryComparison {
        users: users.len(),
        naive_bytes: naive.iter().map(NaiveUser::heap_bytes).sum(),
        flyweight_bytes: table.heap_bytes() + users.iter().map(User::heap_bytes).sum::<usize>(),
        table_entries: table.len(),
    }
}

/// `count` random alphanumeric names of `len` characters each.
pub fn random_names(count: usize, len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_share_parts() {
        let mut table = StringTable::new();
        let user1 = User::new("John Doe", &mut table);
        let user2 = User::new("Jane Doe", &mut table);
        let user3 = User::new("John Smith", &mut table);

        assert_eq!(user1.indices(), [0, 1]);
        assert_eq!(user2.indices(), [2, 1]);
        assert_eq!(user3.indices(), [0, 3]);
        assert_eq!(table.len(), 4);
        assert_eq!(user3.full_name(&table).unwrap(), "John Smith");
    }

    #[test]
    fn test_debug_line() {
        let mut table = StringTable::new();
        let user = User::new("John Doe", &mut table);
        assert_eq!(
            user.debug_line(&table).unwrap(),
            "Indexes: 0, 1 → FullName: John Doe"
        );
    }

    #[test]
    fn test_total_index_count() {
        let mut table = StringTable::new();
        let users: Vec<User> = ["John Doe", "Jane Doe", "Mary Ann Smith"]
            .iter()
            .map(|name| User::new(name, &mut table))
            .collect();
        assert_eq!(total_index_count(&users), 7);
    }

    #[test]
    fn test_naive_user_keeps_copy() {
        let user = NaiveUser::new("John Doe");
        assert_eq!(user.full_name(), "John Doe");
        assert!(user.heap_bytes() >= 8);
    }

    #[test]
    fn test_memory_models_use_same_measure() {
        let first = vec!["Alexandra".to_string(), "Benedict".to_string()];
        let last = vec!["Montgomery".to_string()];
        let comparison = compare_memory(&first, &last);

        let string_header = std::mem::size_of::<String>();
        let index = std::mem::size_of::<usize>();
        assert_eq!(
            comparison.naive_bytes,
            "Alexandra Montgomery".len() + "Benedict Montgomery".len()
        );
        assert_eq!(
            comparison.flyweight_bytes,
            3 * string_header + "AlexandraBenedictMontgomery".len() + 2 * 2 * index
        );
        assert_eq!(comparison.table_entries, 3);
    }

    #[test]
    fn test_random_population_table_is_bounded() {
        let first = random_names(20, 40);
        let last = random_names(20, 40);
        let comparison = compare_memory(&first, &last);

        assert_eq!(comparison.users, 400);
        assert!(comparison.table_entries <= 40);
        assert!(comparison.flyweight_bytes < comparison.naive_bytes);
    }
}
