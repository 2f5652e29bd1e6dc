//! Runtime parse state for one argument definition.

use std::fmt;

use optline_core::ArgSpec;

/// Write-back target invoked with the argument's accumulated values.
///
/// Bindings are called immediately after each successful match, and once
/// after the parse loop for arguments whose default values apply.
pub type Binding = Box<dyn FnMut(&[String])>;

/// An [`ArgSpec`] plus its mutable parse state and optional write-back
/// binding.
///
/// The definition is owned by the session for the duration of a parse;
/// the binding only references caller-owned state (typically through an
/// `Rc<RefCell<_>>` or similar). State is reset at the start of every
/// parse call, so a session can be reused sequentially without leaks.
pub struct Argument {
    spec: ArgSpec,
    parsed: bool,
    values: Vec<String>,
    binding: Option<Binding>,
}

impl Argument {
    /// Wraps a definition with empty parse state and no binding.
    pub fn new(spec: ArgSpec) -> Self {
        Self {
            spec,
            parsed: false,
            values: Vec::new(),
            binding: None,
        }
    }

    /// Wraps a definition with a write-back binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use optline_core::ArgSpec;
    /// use optline_parser::Argument;
    ///
    /// let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    /// let sink = Rc::clone(&seen);
    /// let argument = Argument::bound(
    ///     ArgSpec::single_value(Some('o'), Some("output")),
    ///     move |values| sink.borrow_mut().extend(values.iter().cloned()),
    /// );
    /// assert!(!argument.is_parsed());
    /// ```
    pub fn bound(spec: ArgSpec, binding: impl FnMut(&[String]) + 'static) -> Self {
        Self {
            spec,
            parsed: false,
            values: Vec::new(),
            binding: Some(Box::new(binding)),
        }
    }

    /// The underlying definition.
    pub fn spec(&self) -> &ArgSpec {
        &self.spec
    }

    /// Whether the argument matched at least once in the current parse.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Accumulated values in order of appearance on the command line.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn reset(&mut self) {
        self.parsed = false;
        self.values.clear();
    }

    pub(crate) fn push_value(&mut self, value: String) {
        self.values.push(value);
    }

    pub(crate) fn mark_parsed(&mut self) {
        self.parsed = true;
    }

    /// Invokes the binding with the current value list.
    pub(crate) fn write_back(&mut self) {
        if let Some(binding) = &mut self.binding {
            binding(&self.values);
        }
    }

    /// Populates default values and fires the binding, but only when the
    /// argument never matched. `parsed` stays false: defaults do not
    /// satisfy the mandatory check.
    pub(crate) fn apply_default(&mut self) {
        if !self.parsed && !self.spec.default_values.is_empty() {
            self.values = self.spec.default_values.clone();
            self.write_back();
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("spec", &self.spec)
            .field("parsed", &self.parsed)
            .field("values", &self.values)
            .field("bound", &self.binding.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use optline_core::ArgSpec;

    use super::*;

    #[test]
    fn test_reset_clears_state() {
        let mut argument = Argument::new(ArgSpec::single_value(Some('o'), None));
        argument.push_value("out.txt".to_string());
        argument.mark_parsed();

        argument.reset();
        assert!(!argument.is_parsed());
        assert!(argument.values().is_empty());
    }

    #[test]
    fn test_apply_default_skips_matched_arguments() {
        let updates: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
        let sink = Rc::clone(&updates);
        let mut argument = Argument::bound(
            ArgSpec::single_value(Some('p'), Some("port")).with_default_values(&["8080"]),
            move |values| sink.borrow_mut().push(values.to_vec()),
        );

        argument.push_value("9000".to_string());
        argument.mark_parsed();
        argument.apply_default();
        assert!(updates.borrow().is_empty());
        assert_eq!(argument.values(), ["9000"]);
    }

    #[test]
    fn test_apply_default_fires_binding_once_when_unmatched() {
        let updates: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
        let sink = Rc::clone(&updates);
        let mut argument = Argument::bound(
            ArgSpec::single_value(Some('p'), Some("port")).with_default_values(&["8080"]),
            move |values| sink.borrow_mut().push(values.to_vec()),
        );

        argument.apply_default();
        assert_eq!(*updates.borrow(), vec![vec!["8080".to_string()]]);
        assert!(!argument.is_parsed());
    }
}
