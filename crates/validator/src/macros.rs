//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use rowbind_validator::validator;
//! use rowbind_validator::foundation::Validate;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotBlank for String;
//!     code = "not_blank";
//!     rule(input) { !input.trim().is_empty() }
//!     message() { "must not be blank" }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxChars { max: usize } for String;
//!     code = "max_chars";
//!     rule(self, input) { input.chars().count() <= self.max }
//!     message(self) { format!("must be at most {} characters", self.max) }
//!     fn max_chars(max: usize);
//! }
//!
//! assert!(!not_blank().is_valid(&"  ".to_string()));
//! assert_eq!(max_chars(3).message(), "must be at most 3 characters");
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotBlank for String;
///     code = "not_blank";
///     rule(input) { !input.trim().is_empty() }
///     message() { "must not be blank" }
///     fn not_blank();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MaxChars { max: usize } for String;
///     code = "max_chars";
///     rule(self, input) { input.chars().count() <= self.max }
///     message(self) { format!("must be at most {} characters", self.max) }
///     fn max_chars(max: usize);
/// }
/// ```
///
/// **Generic validator** (one type parameter, bounds must be plain identifiers):
/// ```rust,ignore
/// validator! {
///     pub GreaterThan<T: PartialOrd + Display> { bound: T } for T;
///     code = "greater_than";
///     rule(self, input) { *input > self.bound }
///     message(self) { format!("must greater than {}", self.bound) }
///     fn greater_than(bound: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        code = $code:literal;
        rule($inp:ident) $rule:block
        message() $msg:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            code = $code;
            rule($inp) $rule
            message() $msg
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        code = $code:literal;
        rule($inp:ident) $rule:block
        message() $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn is_valid(&self, $inp: &Self::Input) -> bool $rule

            fn code(&self) -> &str {
                $code
            }

            fn message(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::from($msg)
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        code = $code:literal;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            code = $code;
            rule($self_, $inp) $rule
            message($self2) $msg
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        code = $code:literal;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn is_valid(&$self_, $inp: &Self::Input) -> bool $rule

            fn code(&self) -> &str {
                $code
            }

            fn message(&$self2) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::from($msg)
            }
        }
    };

    // ── Variant 3a: Generic struct + auto new + factory fn ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        code = $code:literal;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            code = $code;
            rule($self_, $inp) $rule
            message($self2) $msg
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Generic struct + auto new, no factory ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        code = $code:literal;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            fn is_valid(&$self_, $inp: &Self::Input) -> bool $rule

            fn code(&self) -> &str {
                $code
            }

            fn message(&$self2) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::from($msg)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::Validate;

    crate::validator! {
        NonZero for i64;
        code = "non_zero";
        rule(input) { *input != 0 }
        message() { "must not be zero" }
        fn non_zero();
    }

    crate::validator! {
        #[derive(Copy, PartialEq, Eq)]
        MultipleOf { factor: i64 } for i64;
        code = "multiple_of";
        rule(self, input) { input % self.factor == 0 }
        message(self) { format!("must be a multiple of {}", self.factor) }
        fn multiple_of(factor: i64);
    }

    #[test]
    fn unit_validator() {
        let v = non_zero();
        assert!(v.is_valid(&3));
        assert!(!v.is_valid(&0));
        assert_eq!(v.code(), "non_zero");
        assert_eq!(v.message(), "must not be zero");
    }

    #[test]
    fn struct_validator() {
        let v = multiple_of(5);
        assert!(v.is_valid(&10));
        assert!(!v.is_valid(&7));
        assert_eq!(v.validate(&7).unwrap_err().message, "must be a multiple of 5");
        assert_eq!(v, MultipleOf::new(5));
    }
}
