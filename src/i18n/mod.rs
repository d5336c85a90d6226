//! Gettext textdomain validation
//!
//! WordPress translation functions take the textdomain as a fixed trailing
//! argument, and extraction tools only understand literal strings. The
//! validator walks a [`Token`] stream and reports calls that pass a
//! non-literal argument or the wrong (or no) textdomain.
//!
//! ```
//! use wpt::i18n::{RuleSet, validate_source};
//!
//! let errors = validate_source("<?php _e( 'Hi', 'other' );", "example", &RuleSet::default());
//! assert_eq!(errors[0].message, "Missing textdomain 'example' as arg #2 in function _e()");
//! ```

pub mod lexer;
mod rules;
mod token;
mod validator;

pub use rules::{FunctionRule, ParamRole, RuleSet};
pub use token::{Token, TokenKind};
pub use validator::{ValidationError, validate};

/// Tokenize PHP source and validate it in one go
pub fn validate_source(source: &str, domain: &str, rules: &RuleSet) -> Vec<ValidationError> {
  validate(&lexer::tokenize(source), domain, rules)
}
