// Expression reducer and brute-force operator search
//
//   1 3 5 7
//    + * -      → 1 + 15 - 7 → 16 - 7 → 9

use std::fmt;
use std::ops::RangeInclusive;

use log::{debug, trace};

use super::operator::{Operator, OperatorAssignments};
use crate::error::{Result, WorkshopError};

/// Largest operand count the brute-force search accepts; `4^(n-1)` grows fast.
pub const MAX_OPERANDS: usize = 10;

/// Operator tiers, tightest first.
const TIERS: [[Operator; 2]; 2] = [
    [Operator::Multiply, Operator::Divide],
    [Operator::Add, Operator::Subtract],
];

/// Operands with the operators between them; no parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    numbers: Vec<i64>,
    ops: Vec<Operator>,
}

impl Problem {
    pub fn new(numbers: Vec<i64>, ops: Vec<Operator>) -> Result<Self> {
        if numbers.is_empty() || ops.len() + 1 != numbers.len() {
            return Err(WorkshopError::OperandCount {
                operands: numbers.len(),
                operators: ops.len(),
            });
        }
        Ok(Self { numbers, ops })
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn ops(&self) -> &[Operator] {
        &self.ops
    }

    /// Evaluates with `*` `/` before `+` `-`, left to right inside a tier.
    ///
    /// After every reduction the scan restarts from the tightest tier. Returns `None`
    /// as soon as a step has no exact integer result.
    pub fn eval(&self) -> Option<i64> {
        let mut numbers = self.numbers.clone();
        let mut ops = self.ops.clone();

        'reduce: while !ops.is_empty() {
            for tier in &TIERS {
                if let Some(idx) = ops.iter().position(|op| tier.contains(op)) {
                    let op = ops.remove(idx);
                    let right = numbers.remove(idx + 1);
                    let left = numbers[idx];
                    let Some(result) = op.apply(left, right) else {
                        trace!("{left}{op}{right} has no exact integer result");
                        return None;
                    };
                    numbers[idx] = result;
                    continue 'reduce;
                }
            }
        }

        numbers.first().copied()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, op) in self.numbers.iter().zip(&self.ops) {
            write!(f, "{number}{op}")?;
        }
        // `new` guarantees one more operand than operators
        if let Some(last) = self.numbers.last() {
            write!(f, "{last}")?;
        }
        Ok(())
    }
}

/// Every operator placement between `numbers` that evaluates to exactly `target`,
/// in counter order.
pub fn solve(numbers: &[i64], target: i64) -> Result<Vec<Problem>> {
    Ok(solve_range(numbers, target..=target)?
        .into_iter()
        .map(|(_, problem)| problem)
        .collect())
}

/// Solutions for every target in `targets`, grouped by target in ascending order.
pub fn solve_range(numbers: &[i64], targets: RangeInclusive<i64>) -> Result<Vec<(i64, Problem)>> {
    if numbers.is_empty() {
        return Err(WorkshopError::OperandCount {
            operands: 0,
            operators: 0,
        });
    }
    if numbers.len() > MAX_OPERANDS {
        return Err(WorkshopError::TooManyOperands {
            operands: numbers.len(),
            max: MAX_OPERANDS,
        });
    }

    let mut evaluated = Vec::new();
    for ops in OperatorAssignments::new(numbers.len() - 1)? {
        let problem = Problem::new(numbers.to_vec(), ops)?;
        if let Some(value) = problem.eval() {
            if targets.contains(&value) {
                evaluated.push((value, problem));
            }
        }
    }
    // stable: counter order is kept inside each target
    evaluated.sort_by_key(|(value, _)| *value);
    debug!(
        "{} placements over {:?} hit {:?}",
        evaluated.len(),
        numbers,
        targets
    );
    Ok(evaluated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Operator::*;

    fn problem(numbers: &[i64], ops: &[Operator]) -> Problem {
        Problem::new(numbers.to_vec(), ops.to_vec()).unwrap()
    }

    #[test]
    fn test_precedence() {
        let p = problem(&[1, 3, 5, 7], &[Add, Multiply, Subtract]);
        assert_eq!(p.eval(), Some(9));
        assert_eq!(p.to_string(), "1+3*5-7");
    }

    #[test]
    fn test_left_to_right_within_tier() {
        assert_eq!(problem(&[8, 4, 2], &[Divide, Divide]).eval(), Some(1));
        assert_eq!(problem(&[10, 3, 2], &[Subtract, Subtract]).eval(), Some(5));
        assert_eq!(problem(&[12, 2, 3], &[Divide, Multiply]).eval(), Some(18));
    }

    #[test]
    fn test_inexact_division_has_no_result() {
        assert_eq!(problem(&[1, 3, 5], &[Divide, Add]).eval(), None);
        assert_eq!(problem(&[1, 0], &[Divide]).eval(), None);
    }

    #[test]
    fn test_eval_leaves_problem_untouched() {
        let p = problem(&[2, 3, 4], &[Add, Multiply]);
        assert_eq!(p.eval(), Some(14));
        assert_eq!(p.eval(), Some(14));
        assert_eq!(p.numbers(), [2, 3, 4]);
        assert_eq!(p.ops(), [Add, Multiply]);
    }

    #[test]
    fn test_single_operand() {
        let p = problem(&[42], &[]);
        assert_eq!(p.eval(), Some(42));
        assert_eq!(p.to_string(), "42");
    }

    #[test]
    fn test_operand_count_checked() {
        assert!(Problem::new(vec![1, 2], vec![]).is_err());
        assert!(Problem::new(vec![], vec![]).is_err());
        assert!(solve(&[], 0).is_err());
    }

    #[test]
    fn test_solve_finds_target() {
        let solutions = solve(&[1, 3, 5, 7], 1).unwrap();
        let rendered: Vec<String> = solutions
            .iter()
            .map(|p| format!("{p}={}", p.eval().unwrap()))
            .collect();
        assert!(rendered.contains(&"1*3+5-7=1".to_string()));
        assert!(solutions.iter().all(|p| p.eval() == Some(1)));
    }

    #[test]
    fn test_solve_range_is_grouped() {
        let rows = solve_range(&[1, 3, 5, 7], 0..=10).unwrap();
        assert!(!rows.is_empty());
        assert!(rows.windows(2).all(|w| w[0].0 <= w[1].0));
        assert!(rows.iter().all(|(target, p)| p.eval() == Some(*target)));
        assert!(rows
            .iter()
            .any(|(target, p)| *target == 0 && p.to_string() == "1-3-5+7"));
    }

    #[test]
    fn test_search_size_is_bounded() {
        let numbers: Vec<i64> = (1..=MAX_OPERANDS as i64).collect();
        assert!(OperatorAssignments::new(numbers.len() - 1).is_ok());

        let too_many: Vec<i64> = (1..=MAX_OPERANDS as i64 + 1).collect();
        assert!(matches!(
            solve(&too_many, 0),
            Err(WorkshopError::TooManyOperands { operands: 11, max: 10 })
        ));
    }

    fn reference_eval(numbers: &[i64], ops: &[Operator]) -> Option<i64> {
        // fold each multiplicative run into a term, then add the terms up
        let mut terms = vec![numbers[0]];
        let mut signs = Vec::new();
        for (op, &n) in ops.iter().zip(&numbers[1..]) {
            match op {
                Multiply | Divide => {
                    let last = terms.last_mut()?;
                    *last = op.apply(*last, n)?;
                }
                Add | Subtract => {
                    signs.push(*op);
                    terms.push(n);
                }
            }
        }
        let mut total = terms[0];
        for (op, term) in signs.iter().zip(&terms[1..]) {
            total = op.apply(total, *term)?;
        }
        Some(total)
    }

    proptest! {
        #[test]
        fn prop_matches_reference(
            numbers in prop::collection::vec(-20i64..20, 1..7),
            codes in prop::collection::vec(0u8..4, 6),
        ) {
            let ops: Vec<Operator> = codes[..numbers.len() - 1]
                .iter()
                .map(|&c| Operator::try_from(c).unwrap())
                .collect();
            let p = problem(&numbers, &ops);
            prop_assert_eq!(p.eval(), reference_eval(&numbers, &ops));
        }
    }
}
