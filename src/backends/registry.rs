// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backend registry with per-variant lazy resolution.
//!
//! Each guest variant owns one cache slot. The first computation through a
//! variant evaluates its snippet and casts the result to the callable
//! capability; every later computation reuses the cached handle. Resolution
//! is deliberately not thread-safe: `Rc` and `RefCell` keep the whole
//! registry owner-thread-only, which is the embedded runtime's own access
//! rule, so no lock is needed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigUint;

use crate::backends::{guest, native, BackendKind};
use crate::errors::BackendError;
use crate::observability::messages::backend::{BackendResolutionFailed, BackendResolved};
use crate::observability::messages::StructuredLog;
use crate::traits::{GuestFunction, GuestRuntime, GuestValue};

/// A factorial result, in the producing variant's representation.
#[derive(Debug, Clone)]
pub enum ComputedValue {
    /// Exact arbitrary-precision integer from the native variant.
    Exact(BigUint),
    /// A guest language's native value (numeric or textual).
    Guest(GuestValue),
}

impl fmt::Display for ComputedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputedValue::Exact(n) => write!(f, "{n}"),
            ComputedValue::Guest(value) => write!(f, "{value}"),
        }
    }
}

/// All computation backends, keyed by [`BackendKind`].
pub struct BackendRegistry {
    runtime: Rc<dyn GuestRuntime>,
    js: RefCell<Option<GuestFunction>>,
    ruby: RefCell<Option<GuestFunction>>,
    r: RefCell<Option<GuestFunction>>,
}

impl BackendRegistry {
    pub fn new(runtime: Rc<dyn GuestRuntime>) -> Self {
        Self {
            runtime,
            js: RefCell::new(None),
            ruby: RefCell::new(None),
            r: RefCell::new(None),
        }
    }

    /// Compute `argument`! through the given variant.
    ///
    /// Guest results are interpreted per that variant's type rules: numeric
    /// for `Js` and `R`, textual for `Ruby`. Anything else is a fault in the
    /// guest side of the contract.
    pub fn compute(&self, kind: BackendKind, argument: i64) -> Result<ComputedValue, BackendError> {
        match kind {
            BackendKind::Java => Ok(ComputedValue::Exact(native::factorial(argument))),
            BackendKind::Js => {
                let value = self.invoke_guest(kind, &self.js, argument)?;
                expect_numeric(kind, value)
            }
            BackendKind::Ruby => {
                let value = self.invoke_guest(kind, &self.ruby, argument)?;
                expect_textual(kind, value)
            }
            BackendKind::R => {
                let value = self.invoke_guest(kind, &self.r, argument)?;
                expect_numeric(kind, value)
            }
        }
    }

    fn invoke_guest(
        &self,
        kind: BackendKind,
        slot: &RefCell<Option<GuestFunction>>,
        argument: i64,
    ) -> Result<GuestValue, BackendError> {
        let function = self.resolve(kind, slot)?;
        function(argument)
    }

    /// Idempotent lazy resolution: evaluate the variant's snippet once, cast
    /// it to the callable capability, cache it for the process lifetime. A
    /// failed resolution leaves the slot empty, so the next request attempts
    /// it again.
    fn resolve(
        &self,
        kind: BackendKind,
        slot: &RefCell<Option<GuestFunction>>,
    ) -> Result<GuestFunction, BackendError> {
        if let Some(function) = slot.borrow().as_ref() {
            return Ok(Rc::clone(function));
        }

        let (language_id, source) = guest::snippet(kind).ok_or_else(|| {
            BackendError::UnexpectedResult(format!("variant '{kind}' has no guest snippet"))
        })?;

        let function = self
            .runtime
            .evaluate(language_id, source)
            .and_then(|value| {
                self.runtime
                    .cast_function(value)
                    .ok_or_else(|| BackendError::NotCallable {
                        language_id: language_id.to_string(),
                    })
            })
            .map_err(|error| {
                BackendResolutionFailed {
                    language_id,
                    error: &error,
                }
                .log();
                error
            })?;

        BackendResolved { language_id }.log();
        slot.borrow_mut().replace(Rc::clone(&function));
        Ok(function)
    }
}

fn expect_numeric(kind: BackendKind, value: GuestValue) -> Result<ComputedValue, BackendError> {
    match value {
        GuestValue::Number(_) => Ok(ComputedValue::Guest(value)),
        other => Err(BackendError::UnexpectedResult(format!(
            "variant '{kind}' returned {other:?}, expected a number"
        ))),
    }
}

fn expect_textual(kind: BackendKind, value: GuestValue) -> Result<ComputedValue, BackendError> {
    match value {
        GuestValue::Text(_) => Ok(ComputedValue::Guest(value)),
        other => Err(BackendError::UnexpectedResult(format!(
            "variant '{kind}' returned {other:?}, expected text"
        ))),
    }
}
