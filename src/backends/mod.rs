// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod guest;
pub mod native;
pub mod registry;
pub mod stub;

pub use registry::{BackendRegistry, ComputedValue};

/// One interchangeable implementation of the factorial computation.
///
/// Variant names match the wire routes. `Java` is the variant the original
/// polyglot service computed on its host side; here it is the native,
/// exact-precision implementation and the one designated slow/CPU-bound, so
/// the dispatcher offloads it instead of calling it inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Java,
    Js,
    Ruby,
    R,
}

impl BackendKind {
    /// All variants, in route-matching order. The trailing slash in each
    /// prefix keeps the variants from shadowing one another.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Java,
        BackendKind::Js,
        BackendKind::Ruby,
        BackendKind::R,
    ];

    /// Route prefix selecting this variant, including both slashes.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            BackendKind::Java => "/java/",
            BackendKind::Js => "/js/",
            BackendKind::Ruby => "/ruby/",
            BackendKind::R => "/r/",
        }
    }

    /// Whether the dispatcher must delegate this variant to the worker
    /// rather than compute it inline.
    pub fn offloaded(&self) -> bool {
        matches!(self, BackendKind::Java)
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BackendKind::Java => "java",
            BackendKind::Js => "js",
            BackendKind::Ruby => "ruby",
            BackendKind::R => "r",
        };
        f.write_str(name)
    }
}
