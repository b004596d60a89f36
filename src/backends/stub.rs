// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process stand-in for the embedded multi-language runtime.
//!
//! The real collaborator is an interpreter this crate only talks to through
//! [`GuestRuntime`]. The stub recognizes the shipped snippets by language id
//! and answers with native closures that reproduce each guest language's
//! value semantics: JS and R compute in double-precision floats (their
//! native numeric type, with the overflow behavior that implies), Ruby
//! computes exactly and answers with text.
//!
//! The binary wires this in where an interpreter integration would go; tests
//! use it as the instrumented double (evaluation counter, failure injection).

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::backends::{guest, native};
use crate::errors::BackendError;
use crate::traits::{GuestFunction, GuestRuntime, GuestValue};

pub struct StubGuestRuntime {
    evaluations: Cell<usize>,
    failing: RefCell<HashSet<String>>,
    non_callable: RefCell<HashSet<String>>,
}

impl StubGuestRuntime {
    pub fn new() -> Self {
        Self {
            evaluations: Cell::new(0),
            failing: RefCell::new(HashSet::new()),
            non_callable: RefCell::new(HashSet::new()),
        }
    }

    /// How many times `evaluate` has run, over all languages.
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.get()
    }

    /// Make every evaluation of `language_id` fail until cleared.
    pub fn fail_evaluation_for(&self, language_id: &str) {
        self.failing.borrow_mut().insert(language_id.to_string());
    }

    /// Make evaluations of `language_id` return a non-callable value.
    pub fn return_non_callable_for(&self, language_id: &str) {
        self.non_callable
            .borrow_mut()
            .insert(language_id.to_string());
    }

    pub fn clear_failures(&self) {
        self.failing.borrow_mut().clear();
        self.non_callable.borrow_mut().clear();
    }
}

impl Default for StubGuestRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestRuntime for StubGuestRuntime {
    fn evaluate(&self, language_id: &str, _source: &str) -> Result<GuestValue, BackendError> {
        self.evaluations.set(self.evaluations.get() + 1);

        if self.failing.borrow().contains(language_id) {
            return Err(BackendError::Evaluation {
                language_id: language_id.to_string(),
                message: "injected evaluation failure".to_string(),
            });
        }
        if self.non_callable.borrow().contains(language_id) {
            return Ok(GuestValue::Number(0.0));
        }

        let function: GuestFunction = match language_id {
            guest::JS_LANGUAGE_ID => Rc::new(|n| Ok(GuestValue::Number(float_factorial(n)))),
            guest::RUBY_LANGUAGE_ID => {
                Rc::new(|n| Ok(GuestValue::Text(native::factorial(n).to_string())))
            }
            guest::R_LANGUAGE_ID => Rc::new(|n| Ok(GuestValue::Number(float_factorial(n)))),
            other => {
                return Err(BackendError::Evaluation {
                    language_id: other.to_string(),
                    message: "unknown language".to_string(),
                })
            }
        };
        Ok(GuestValue::Function(function))
    }

    fn cast_function(&self, value: GuestValue) -> Option<GuestFunction> {
        match value {
            GuestValue::Function(function) => Some(function),
            _ => None,
        }
    }
}

/// Factorial in double precision, the native numeric type of JS and R.
/// Large inputs lose exactness and eventually reach infinity, which is
/// faithful to those guests.
fn float_factorial(n: i64) -> f64 {
    let mut result = 1.0_f64;
    let mut i = n;
    while i >= 2 {
        result *= i as f64;
        i -= 1;
    }
    result
}
