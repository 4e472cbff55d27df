/// Version string shown by the CLI, e.g. `0.0.0`.
pub const fn inquiry_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Extension for `Option<String>`-like form inputs.
pub trait NonEmpty: Sized {
    /// Returns `None` if `self` is empty.
    ///
    /// #### Example
    /// ```rust
    /// # use inquiry_utils::NonEmpty;
    /// assert_eq!(String::new().non_empty(), None);
    /// assert_eq!("@max".to_owned().non_empty().as_deref(), Some("@max"));
    /// ```
    fn non_empty(self) -> Option<Self>;
}

impl NonEmpty for String {
    fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
