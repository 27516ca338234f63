// Bit fragging: four operators fit in two bits each
//
//   *  /  +  -
//   00 01 10 11
//
// A u64 therefore holds up to 32 operator slots, slot 0 in the lowest bits.

use std::fmt;

use crate::error::{Result, WorkshopError};

/// Width of one packed operator code.
pub const BITS_PER_CODE: usize = 2;
/// Slots available in a `u64`.
pub const MAX_SLOTS: usize = u64::BITS as usize / BITS_PER_CODE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
    Multiply = 0,
    Divide = 1,
    Add = 2,
    Subtract = 3,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Multiply,
        Operator::Divide,
        Operator::Add,
        Operator::Subtract,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Applies the operator, returning `None` when the result is not an exact integer
    /// (inexact or zero division) or does not fit in an `i64`.
    pub fn apply(self, x: i64, y: i64) -> Option<i64> {
        match self {
            Operator::Multiply => x.checked_mul(y),
            Operator::Divide => {
                if y == 0 || x.checked_rem(y)? != 0 {
                    None
                } else {
                    x.checked_div(y)
                }
            }
            Operator::Add => x.checked_add(y),
            Operator::Subtract => x.checked_sub(y),
        }
    }

    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Multiply | Operator::Divide => 1,
            Operator::Add | Operator::Subtract => 0,
        }
    }
}

impl TryFrom<u8> for Operator {
    type Error = WorkshopError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Operator::Multiply),
            1 => Ok(Operator::Divide),
            2 => Ok(Operator::Add),
            3 => Ok(Operator::Subtract),
            other => Err(WorkshopError::InvalidOperatorCode(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Read-only view of a `u64` as 32 two-bit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoBitSet(u64);

impl TwoBitSet {
    pub fn new(data: u64) -> Self {
        Self(data)
    }

    pub fn data(&self) -> u64 {
        self.0
    }

    /// Code stored at `slot`: `(data >> (2 * slot)) & 0b11`.
    pub fn get(&self, slot: usize) -> Result<u8> {
        if slot >= MAX_SLOTS {
            return Err(WorkshopError::SlotOutOfRange { slot });
        }
        Ok(((self.0 >> (slot * BITS_PER_CODE)) & 0b11) as u8)
    }

    /// Decodes the first `count` slots as operators.
    pub fn operators(&self, count: usize) -> Result<Vec<Operator>> {
        (0..count)
            .map(|slot| self.get(slot).and_then(Operator::try_from))
            .collect()
    }
}

/// Every operator sequence of a fixed length, enumerated by a plain counter.
///
/// Counter value `k` decodes to the sequence whose slot `i` is the `i`-th base-4
/// digit of `k`, so `Multiply` varies fastest in slot 0.
#[derive(Debug, Clone)]
pub struct OperatorAssignments {
    slots: usize,
    next: u64,
    end: u64,
}

impl OperatorAssignments {
    /// At most `MAX_SLOTS - 1` slots: the counter end `4^slots` must fit in a `u64`.
    pub fn new(slots: usize) -> Result<Self> {
        if slots >= MAX_SLOTS {
            return Err(WorkshopError::SlotOutOfRange { slot: slots });
        }
        let end = 1u64 << (slots * BITS_PER_CODE);
        Ok(Self {
            slots,
            next: 0,
            end,
        })
    }

    pub fn total(&self) -> u64 {
        self.end
    }
}

impl Iterator for OperatorAssignments {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let key = TwoBitSet::new(self.next);
        self.next += 1;
        key.operators(self.slots).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_symbols() {
        let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "*/+-");
    }

    #[test]
    fn test_codes_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.code()).unwrap(), op);
        }
        assert!(matches!(
            Operator::try_from(4),
            Err(WorkshopError::InvalidOperatorCode(4))
        ));
    }

    #[test]
    fn test_apply_exact_division_only() {
        assert_eq!(Operator::Divide.apply(15, 5), Some(3));
        assert_eq!(Operator::Divide.apply(1, 3), None);
        assert_eq!(Operator::Divide.apply(1, 0), None);
        assert_eq!(Operator::Divide.apply(-9, 3), Some(-3));
        assert_eq!(Operator::Subtract.apply(1, 3), Some(-2));
        assert_eq!(Operator::Multiply.apply(i64::MAX, 2), None);
    }

    #[test]
    fn test_two_bit_set_layout() {
        // 00 10 01 01
        let bits = TwoBitSet::new(0b0010_0101);
        assert_eq!(bits.get(0).unwrap(), 0b01);
        assert_eq!(bits.get(1).unwrap(), 0b01);
        assert_eq!(bits.get(2).unwrap(), 0b10);
        assert_eq!(bits.get(3).unwrap(), 0b00);
        assert_eq!(
            bits.operators(3).unwrap(),
            vec![Operator::Divide, Operator::Divide, Operator::Add]
        );
    }

    #[test]
    fn test_highest_slot() {
        let bits = TwoBitSet::new(0b11 << 62);
        assert_eq!(bits.get(31).unwrap(), 0b11);
        assert!(matches!(
            bits.get(32),
            Err(WorkshopError::SlotOutOfRange { slot: 32 })
        ));
    }

    #[test]
    fn test_assignments_cover_every_sequence() {
        let all: Vec<Vec<Operator>> = OperatorAssignments::new(3).unwrap().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], vec![Operator::Multiply; 3]);
        assert_eq!(all[63], vec![Operator::Subtract; 3]);
        assert_eq!(
            all[0b10_00_11],
            vec![Operator::Subtract, Operator::Multiply, Operator::Add]
        );

        let mut unique = all.clone();
        unique.sort_by_key(|ops| ops.iter().map(|op| op.code()).collect::<Vec<_>>());
        unique.dedup();
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn test_assignments_empty_sequence() {
        let all: Vec<Vec<Operator>> = OperatorAssignments::new(0).unwrap().collect();
        assert_eq!(all, vec![Vec::<Operator>::new()]);
        assert!(OperatorAssignments::new(33).is_err());
    }

    #[test]
    fn test_assignments_counter_limit() {
        let widest = OperatorAssignments::new(MAX_SLOTS - 1).unwrap();
        assert_eq!(widest.total(), 1u64 << 62);
        assert!(matches!(
            OperatorAssignments::new(MAX_SLOTS),
            Err(WorkshopError::SlotOutOfRange { slot: 32 })
        ));
    }

    proptest! {
        #[test]
        fn prop_slot_is_base4_digit(word in 0u64..64, slot in 0usize..3) {
            let expected = (word / 4u64.pow(slot as u32)) % 4;
            prop_assert_eq!(TwoBitSet::new(word).get(slot).unwrap() as u64, expected);
        }
    }
}
