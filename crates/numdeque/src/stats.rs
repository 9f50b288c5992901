//! Aggregate statistics over an array's elements.

use crate::deque::NumericDeque;

impl NumericDeque {
    /// Smallest element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn min(&self) -> f64 {
        self.fold_nonempty("min", |acc, v| if v < acc { v } else { acc })
    }

    /// Largest element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn max(&self) -> f64 {
        self.fold_nonempty("max", |acc, v| if v > acc { v } else { acc })
    }

    /// Sum of all elements; `0.0` for an empty array.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn sum(&self) -> f64 {
        self.live("sum").window().iter().sum()
    }

    /// Arithmetic mean.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn mean(&self) -> f64 {
        let buffer = self.live("mean");
        let window = buffer.window();
        assert!(!window.is_empty(), "mean: array {} is empty", self.id());
        window.iter().sum::<f64>() / window.len() as f64
    }

    /// Median: the middle element of a sorted copy, or the mean of the two
    /// middle elements when the size is even.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn median(&self) -> f64 {
        let mut sorted = self.live("median").window().to_vec();
        assert!(!sorted.is_empty(), "median: array {} is empty", self.id());
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        }
    }

    fn fold_nonempty(&self, op: &str, f: impl Fn(f64, f64) -> f64) -> f64 {
        let buffer = self.live(op);
        match buffer.window().split_first() {
            Some((&head, tail)) => tail.iter().fold(head, |acc, &v| f(acc, v)),
            None => panic!("{op}: array {} is empty", self.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::deque::NumericDeque;
    use crate::registry::Registry;

    fn deque(reg: &Rc<Registry>, values: &[f64]) -> NumericDeque {
        let mut d = NumericDeque::new_in(reg);
        d.extend(values.iter().copied());
        d
    }

    #[test]
    fn min_max_sum_mean() {
        let reg = Rc::new(Registry::new());
        let a = deque(&reg, &[3.0, -1.0, 4.0, 1.0, 5.0]);
        assert_eq!(a.min(), -1.0);
        assert_eq!(a.max(), 5.0);
        assert_eq!(a.sum(), 12.0);
        assert_eq!(a.mean(), 2.4);
    }

    #[test]
    fn median_odd_and_even() {
        let reg = Rc::new(Registry::new());
        assert_eq!(deque(&reg, &[5.0, 1.0, 3.0]).median(), 3.0);
        assert_eq!(deque(&reg, &[4.0, 1.0, 3.0, 2.0]).median(), 2.5);
    }

    #[test]
    fn median_does_not_reorder_source() {
        let reg = Rc::new(Registry::new());
        let a = deque(&reg, &[3.0, 1.0, 2.0]);
        a.median();
        assert_eq!(a.to_vec(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let reg = Rc::new(Registry::new());
        assert_eq!(NumericDeque::new_in(&reg).sum(), 0.0);
    }

    #[test]
    fn aggregates_after_front_pushes() {
        let reg = Rc::new(Registry::new());
        let mut a = NumericDeque::new_in(&reg);
        for i in 0..25 {
            a.push_front(f64::from(i));
        }
        assert_eq!(a.min(), 0.0);
        assert_eq!(a.max(), 24.0);
        assert_eq!(a.median(), 12.0);
    }

    #[test]
    #[should_panic(expected = "min: array")]
    fn min_of_empty_panics() {
        NumericDeque::new_in(&Rc::new(Registry::new())).min();
    }

    #[test]
    #[should_panic(expected = "max: array")]
    fn max_of_empty_panics() {
        NumericDeque::new_in(&Rc::new(Registry::new())).max();
    }

    #[test]
    #[should_panic(expected = "mean: array")]
    fn mean_of_empty_panics() {
        NumericDeque::new_in(&Rc::new(Registry::new())).mean();
    }

    #[test]
    #[should_panic(expected = "median: array")]
    fn median_of_empty_panics() {
        NumericDeque::new_in(&Rc::new(Registry::new())).median();
    }
}
