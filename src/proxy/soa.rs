// Composite proxy: structure of arrays behind per-creature views
//
// Array of structures:  Age X Y | Age X Y | Age X Y
// Structure of arrays:  Age Age Age | X X X | Y Y Y

use crate::error::{Result, WorkshopError};

/// Array-of-structures baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatureRecord {
    pub age: u8,
    pub x: i32,
    pub y: i32,
}

/// Fixed-size creature table stored as parallel arrays.
#[derive(Debug, Clone)]
pub struct Creatures {
    ages: Vec<u8>,
    xs: Vec<i32>,
    ys: Vec<i32>,
}

/// Read-only view of one creature.
#[derive(Debug, Clone, Copy)]
pub struct CreatureRef<'a> {
    creatures: &'a Creatures,
    index: usize,
}

/// Mutable view of one creature; writes land directly in the backing arrays.
#[derive(Debug)]
pub struct CreatureMut<'a> {
    pub age: &'a mut u8,
    pub x: &'a mut i32,
    pub y: &'a mut i32,
}

impl Creatures {
    pub fn new(size: usize) -> Self {
        Self {
            ages: vec![0; size],
            xs: vec![0; size],
            ys: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(WorkshopError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<CreatureRef<'_>> {
        self.check(index)?;
        Ok(CreatureRef {
            creatures: self,
            index,
        })
    }

    pub fn at(&mut self, index: usize) -> Result<CreatureMut<'_>> {
        self.check(index)?;
        Ok(CreatureMut {
            age: &mut self.ages[index],
            x: &mut self.xs[index],
            y: &mut self.ys[index],
        })
    }

    /// Views in index order. A fresh sequence is produced on every call.
    pub fn iter(&self) -> impl Iterator<Item = CreatureRef<'_>> + '_ {
        (0..self.len()).map(move |index| CreatureRef {
            creatures: self,
            index,
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = CreatureMut<'_>> + '_ {
        self.ages
            .iter_mut()
            .zip(self.xs.iter_mut())
            .zip(self.ys.iter_mut())
            .map(|((age, x), y)| CreatureMut { age, x, y })
    }

    pub fn ages(&self) -> &[u8] {
        &self.ages
    }

    pub fn xs(&self) -> &[i32] {
        &self.xs
    }

    pub fn ys(&self) -> &[i32] {
        &self.ys
    }
}

impl<'a> CreatureRef<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn age(&self) -> u8 {
        self.creatures.ages[self.index]
    }

    pub fn x(&self) -> i32 {
        self.creatures.xs[self.index]
    }

    pub fn y(&self) -> i32 {
        self.creatures.ys[self.index]
    }

    pub fn to_record(&self) -> CreatureRecord {
        CreatureRecord {
            age: self.age(),
            x: self.x(),
            y: self.y(),
        }
    }
}
