//! Value-in / value-out traits for code that uses a numeric container.
//!
//! Calculators, matrix helpers and tool loops push scalar results in and
//! read values back out. They program against these traits and never see
//! the buffer layout behind them.

/// A container that accepts scalar values appended at the back.
pub trait ScalarSink {
    /// Append one value.
    fn push_scalar(&mut self, value: f64);

    /// Append every value from `values`, in order.
    fn push_scalars(&mut self, values: &[f64]) {
        for &v in values {
            self.push_scalar(v);
        }
    }
}

/// A container that exposes scalar values by logical index.
pub trait ScalarSource {
    /// Number of values currently readable.
    fn scalar_count(&self) -> usize;

    /// Read the value at `index`.
    ///
    /// Returns `None` if `index` is out of range or the container can no
    /// longer be read.
    fn scalar_at(&self, index: usize) -> Option<f64>;

    /// Collect every readable value into a `Vec`.
    fn collect_scalars(&self) -> Vec<f64> {
        (0..self.scalar_count())
            .filter_map(|i| self.scalar_at(i))
            .collect()
    }
}

impl ScalarSink for Vec<f64> {
    fn push_scalar(&mut self, value: f64) {
        self.push(value);
    }
}

impl ScalarSource for [f64] {
    fn scalar_count(&self) -> usize {
        self.len()
    }

    fn scalar_at(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl ScalarSource for Vec<f64> {
    fn scalar_count(&self) -> usize {
        self.len()
    }

    fn scalar_at(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}
