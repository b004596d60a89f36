// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Guest-language snippets for the interpreter-backed variants.
//!
//! Each guest variant is resolved by evaluating one of these snippets and
//! casting the resulting value to the callable capability. Each snippet
//! returns the factorial in that language's natural representation (numeric
//! for JS and R, textual for Ruby's arbitrary-precision integers).

use crate::backends::BackendKind;

pub const JS_LANGUAGE_ID: &str = "text/javascript";
pub const JS_FACTORIAL_SOURCE: &str =
    "(function fac(n) {\n    if (n <= 1) return 1;\n    return n * fac(n - 1);\n})\n";

pub const RUBY_LANGUAGE_ID: &str = "application/x-ruby";
pub const RUBY_FACTORIAL_SOURCE: &str =
    "def fac(n)\n  f = (1..n).reduce(1, :*)\n  f.to_s\nend\nmethod(:fac)";

pub const R_LANGUAGE_ID: &str = "text/x-r";
pub const R_FACTORIAL_SOURCE: &str = "factorial";

/// Language id and source snippet for a guest variant; `None` for the
/// native variant, which needs no resolution.
pub fn snippet(kind: BackendKind) -> Option<(&'static str, &'static str)> {
    match kind {
        BackendKind::Java => None,
        BackendKind::Js => Some((JS_LANGUAGE_ID, JS_FACTORIAL_SOURCE)),
        BackendKind::Ruby => Some((RUBY_LANGUAGE_ID, RUBY_FACTORIAL_SOURCE)),
        BackendKind::R => Some((R_LANGUAGE_ID, R_FACTORIAL_SOURCE)),
    }
}
