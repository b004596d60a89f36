// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Route-key grammar.
//!
//! Three categories of route: the exact shutdown command, prefix-matched
//! compute commands (the prefix names the backend variant, the suffix is a
//! decimal integer argument), and a catch-all echo. A compute prefix with a
//! non-numeric suffix is a caller error with its own variant so the
//! dispatcher can answer it deterministically.

use crate::backends::BackendKind;

/// Exact-match shutdown command.
pub const QUIT_ROUTE: &str = "/quit";

/// A parsed route key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Shutdown: farewell response, then process termination.
    Quit,
    /// A compute command with a well-formed integer argument.
    Compute { backend: BackendKind, argument: i64 },
    /// A compute command whose argument did not parse.
    InvalidArgument { backend: BackendKind },
    /// Anything else; echoed back verbatim.
    Echo,
}

impl Route {
    pub fn parse(route_key: &str) -> Route {
        if route_key == QUIT_ROUTE {
            return Route::Quit;
        }
        for backend in BackendKind::ALL {
            if let Some(suffix) = route_key.strip_prefix(backend.route_prefix()) {
                return match suffix.parse::<i64>() {
                    Ok(argument) => Route::Compute { backend, argument },
                    Err(_) => Route::InvalidArgument { backend },
                };
            }
        }
        Route::Echo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_matches_exactly() {
        assert_eq!(Route::parse("/quit"), Route::Quit);
        assert_eq!(Route::parse("/quit/now"), Route::Echo);
        assert_eq!(Route::parse("/quitting"), Route::Echo);
    }

    #[test]
    fn compute_routes_carry_their_variant_and_argument() {
        assert_eq!(
            Route::parse("/java/5"),
            Route::Compute {
                backend: BackendKind::Java,
                argument: 5
            }
        );
        assert_eq!(
            Route::parse("/js/6"),
            Route::Compute {
                backend: BackendKind::Js,
                argument: 6
            }
        );
        assert_eq!(
            Route::parse("/ruby/4"),
            Route::Compute {
                backend: BackendKind::Ruby,
                argument: 4
            }
        );
        assert_eq!(
            Route::parse("/r/10"),
            Route::Compute {
                backend: BackendKind::R,
                argument: 10
            }
        );
    }

    #[test]
    fn negative_arguments_parse() {
        assert_eq!(
            Route::parse("/java/-1"),
            Route::Compute {
                backend: BackendKind::Java,
                argument: -1
            }
        );
    }

    #[test]
    fn non_numeric_suffix_is_an_invalid_argument() {
        assert_eq!(
            Route::parse("/js/six"),
            Route::InvalidArgument {
                backend: BackendKind::Js
            }
        );
        assert_eq!(
            Route::parse("/java/"),
            Route::InvalidArgument {
                backend: BackendKind::Java
            }
        );
    }

    #[test]
    fn unmatched_routes_fall_through_to_echo() {
        assert_eq!(Route::parse("/HelloMaven!"), Route::Echo);
        assert_eq!(Route::parse("/"), Route::Echo);
        assert_eq!(Route::parse(""), Route::Echo);
        // Prefix match requires the trailing slash.
        assert_eq!(Route::parse("/java"), Route::Echo);
    }
}
