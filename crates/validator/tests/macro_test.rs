//! The `validator!` macro used from a downstream crate.

use rowbind_validator::prelude::*;
use rowbind_validator::validator;

validator! {
    pub NotBlank for String;
    code = "not_blank";
    rule(input) { !input.trim().is_empty() }
    message() { "must not be blank" }
    fn not_blank();
}

validator! {
    #[derive(Copy, PartialEq, Eq)]
    pub MaxChars { max: usize } for String;
    code = "max_chars";
    rule(self, input) { input.chars().count() <= self.max }
    message(self) { format!("must be at most {} characters", self.max) }
    fn max_chars(max: usize);
}

#[test]
fn macro_validators_compose_in_a_chain() {
    let chain = ValidatorChain::<String>::new()
        .with(not_blank())
        .with(max_chars(5));

    assert_eq!(chain.first_failure(&"   ".into()).unwrap().code(), "not_blank");
    assert_eq!(
        chain.first_failure(&"too long".into()).unwrap().message(),
        "must be at most 5 characters"
    );
    assert!(chain.is_valid(&"fine".into()));
}
