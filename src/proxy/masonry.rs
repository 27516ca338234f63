// Array-backed properties: named accessors over one flag array,
// so an aggregate `all` needs no per-field bookkeeping

const PILLARS: usize = 0;
const WALLS: usize = 1;
const FLOORS: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MasonrySettings {
    flags: [bool; 3],
}

impl MasonrySettings {
    pub fn pillars(&self) -> bool {
        self.flags[PILLARS]
    }

    pub fn set_pillars(&mut self, value: bool) {
        self.flags[PILLARS] = value;
    }

    pub fn walls(&self) -> bool {
        self.flags[WALLS]
    }

    pub fn set_walls(&mut self, value: bool) {
        self.flags[WALLS] = value;
    }

    pub fn floors(&self) -> bool {
        self.flags[FLOORS]
    }

    pub fn set_floors(&mut self, value: bool) {
        self.flags[FLOORS] = value;
    }

    /// `Some(flag)` when every flag agrees, `None` when they are mixed.
    pub fn all(&self) -> Option<bool> {
        let first = self.flags[0];
        self.flags[1..].iter().all(|&f| f == first).then_some(first)
    }

    /// Sets every flag; `None` leaves them unchanged.
    pub fn set_all(&mut self, value: Option<bool>) {
        if let Some(value) = value {
            self.flags.fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_reflects_flags() {
        let mut settings = MasonrySettings::default();
        assert_eq!(settings.all(), Some(false));

        settings.set_walls(true);
        assert_eq!(settings.all(), None);

        settings.set_pillars(true);
        settings.set_floors(true);
        assert_eq!(settings.all(), Some(true));
    }

    #[test]
    fn test_set_all() {
        let mut settings = MasonrySettings::default();
        settings.set_all(Some(true));
        assert!(settings.pillars() && settings.walls() && settings.floors());

        settings.set_floors(false);
        settings.set_all(None);
        assert!(!settings.floors());
        assert_eq!(settings.all(), None);
    }
}
