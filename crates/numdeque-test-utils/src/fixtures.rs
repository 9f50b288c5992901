//! Stand-in collaborators that use a numeric container as a black box.
//!
//! - [`CalculatorTape`]: evaluates binary operations and pushes each
//!   result into any [`ScalarSink`], the way a command-line calculator
//!   records its history.
//! - [`summarize`]: reads every value from any [`ScalarSource`] and
//!   reduces it to a [`Summary`], the way a report generator consumes it.

use numdeque_core::{ScalarSink, ScalarSource};

/// A binary arithmetic operator understood by [`CalculatorTape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// Evaluates operations and records results into a sink.
pub struct CalculatorTape<'a, S: ScalarSink> {
    sink: &'a mut S,
    evaluated: usize,
}

impl<'a, S: ScalarSink> CalculatorTape<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, evaluated: 0 }
    }

    /// Evaluate `lhs op rhs`, record the result, and return it.
    pub fn eval(&mut self, lhs: f64, op: Op, rhs: f64) -> f64 {
        let result = op.apply(lhs, rhs);
        self.sink.push_scalar(result);
        self.evaluated += 1;
        result
    }

    /// Number of operations recorded.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }
}

/// Count, sum, and extremes of a source's values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Reduce every readable value of `source` to a [`Summary`].
pub fn summarize<S: ScalarSource + ?Sized>(source: &S) -> Summary {
    let values = source.collect_scalars();
    Summary {
        count: values.len(),
        sum: values.iter().sum(),
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
    }
}
