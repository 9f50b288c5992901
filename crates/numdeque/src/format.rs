//! Text rendering of arrays.

use std::fmt;
use std::fmt::Write as _;

use crate::deque::NumericDeque;

/// Decimal places used for every rendered element.
const PRECISION: usize = 5;

impl NumericDeque {
    /// Render as `[v0,v1,...,vk]` with five decimals per value.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn to_debug_string(&self) -> String {
        let buffer = self.live("to_debug_string");
        let window = buffer.window();
        let mut out = String::with_capacity(2 + window.len() * (PRECISION + 4));
        out.push('[');
        for (i, v) in window.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{:.*}", PRECISION, v);
        }
        out.push(']');
        out
    }

    /// Multi-line dump of the cursor bookkeeping and contents.
    ///
    /// Safe to call on a destroyed array.
    pub fn debug_info(&self) -> String {
        if !self.is_valid() {
            return format!("array {}: destroyed", self.id());
        }
        let buffer = self.live("debug_info");
        format!(
            "array {}\n  capacity: {}\n  origin:   {}\n  end:      {}\n  size:     {}\n  contents: {}",
            self.id(),
            buffer.capacity(),
            buffer.origin(),
            buffer.end(),
            buffer.len(),
            self.to_debug_string()
        )
    }

    /// Emit [`debug_info`](Self::debug_info) at `debug` level.
    pub fn print_debug_info(&self) {
        log::debug!("{}", self.debug_info());
    }
}

impl fmt::Display for NumericDeque {
    /// Same format as [`NumericDeque::to_debug_string`]; destroyed arrays
    /// render as `<destroyed>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str(&self.to_debug_string())
        } else {
            f.write_str("<destroyed>")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::deque::NumericDeque;
    use crate::registry::Registry;

    #[test]
    fn renders_five_decimals_comma_separated() {
        let reg = Rc::new(Registry::new());
        let mut da = NumericDeque::new_in(&reg);
        let mut x = 1.0;
        while x <= 5.0 {
            da.push_back(x);
            x += 1.0;
        }
        assert_eq!(
            da.to_debug_string(),
            "[1.00000,2.00000,3.00000,4.00000,5.00000]"
        );
        assert_eq!(da.to_string(), da.to_debug_string());
    }

    #[test]
    fn renders_empty_and_negative() {
        let reg = Rc::new(Registry::new());
        let mut da = NumericDeque::new_in(&reg);
        assert_eq!(da.to_debug_string(), "[]");
        da.push_back(-1.2345);
        da.push_front(0.000004);
        assert_eq!(da.to_debug_string(), "[0.00000,-1.23450]");
    }

    #[test]
    fn debug_info_reports_cursors() {
        let reg = Rc::new(Registry::new());
        let mut da = NumericDeque::new_in(&reg);
        da.push_back(1.0);
        let info = da.debug_info();
        assert!(info.contains("capacity: 10"));
        assert!(info.contains("origin:   5"));
        assert!(info.contains("end:      6"));
        assert!(info.contains("[1.00000]"));
    }

    #[test]
    fn destroyed_array_renders_marker() {
        let reg = Rc::new(Registry::new());
        let mut da = NumericDeque::new_in(&reg);
        da.destroy();
        assert_eq!(da.to_string(), "<destroyed>");
        assert!(da.debug_info().ends_with("destroyed"));
    }
}
