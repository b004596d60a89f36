// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Seam to the embedded multi-language runtime.
//!
//! The switchboard never links an interpreter directly. Everything it needs
//! from one is expressed here: evaluate a snippet of guest code, and cast the
//! resulting value to a callable capability. Resolution and invocation happen
//! exclusively on the owner thread, which is why the callable handle is an
//! `Rc` rather than an `Arc`: a `GuestFunction` that crossed a thread
//! boundary would be a bug, and the type system refuses to compile one.

use std::fmt;
use std::rc::Rc;

use crate::errors::BackendError;

/// A value produced by evaluating guest code.
#[derive(Clone)]
pub enum GuestValue {
    /// A numeric result in the guest language's native numeric type.
    Number(f64),
    /// A textual result (used by guests whose natural representation for
    /// arbitrary-precision integers is a string).
    Text(String),
    /// A callable guest object, extractable via [`GuestRuntime::cast_function`].
    Function(GuestFunction),
}

impl fmt::Debug for GuestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            GuestValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            GuestValue::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl fmt::Display for GuestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral numerics render without a fractional part; this is how
            // the guest languages themselves print whole numbers. Magnitudes
            // past i64 fall through to plain float formatting, which prints
            // integral doubles in full rather than saturating.
            GuestValue::Number(n)
                if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 =>
            {
                write!(f, "{}", *n as i64)
            }
            GuestValue::Number(n) => write!(f, "{n}"),
            GuestValue::Text(s) => f.write_str(s),
            GuestValue::Function(_) => f.write_str("<function>"),
        }
    }
}

/// A resolved callable handle into the guest runtime.
///
/// Safe to invoke repeatedly; never safe to move off the owner thread.
pub type GuestFunction = Rc<dyn Fn(i64) -> Result<GuestValue, BackendError>>;

/// The embedded-runtime collaborator.
///
/// Implementations are owner-thread-only by contract; nothing here is `Send`.
pub trait GuestRuntime {
    /// Evaluate `source` in the language identified by `language_id` (a MIME
    /// type, e.g. `text/javascript`) and return the resulting value.
    fn evaluate(&self, language_id: &str, source: &str) -> Result<GuestValue, BackendError>;

    /// Cast an evaluated value to the callable capability, or `None` if the
    /// value is not callable.
    fn cast_function(&self, value: GuestValue) -> Option<GuestFunction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(GuestValue::Number(720.0).to_string(), "720");
        assert_eq!(GuestValue::Number(0.0).to_string(), "0");
    }

    #[test]
    fn fractional_numbers_render_as_is() {
        assert_eq!(GuestValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn integral_numbers_past_i64_are_not_clamped() {
        // 21! in double precision, the way the JS and R guests compute it.
        let mut value = 1.0_f64;
        for i in 2..=21_i64 {
            value *= i as f64;
        }
        let rendered = GuestValue::Number(value).to_string();
        assert_ne!(rendered, i64::MAX.to_string());
        assert_eq!(rendered, format!("{value}"));
    }

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(GuestValue::Text("3628800".into()).to_string(), "3628800");
    }
}
