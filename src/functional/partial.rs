//! Partial application.
//!
//! [`partial!`](crate::partial) fixes some arguments of a two- or
//! three-argument function and returns a closure over the rest. The token
//! `__` marks a position left open; any other expression is evaluated once
//! and cloned into each call.
//!
//! ```rust
//! use patternbook::partial;
//!
//! fn volume(width: u32, height: u32, depth: u32) -> u32 {
//!     width * height * depth
//! }
//!
//! let flat = partial!(volume, __, __, 1);
//! let square_column = partial!(volume, 2, 2, __);
//!
//! assert_eq!(flat(3, 4), 12);
//! assert_eq!(square_column(5), 20);
//! ```

use crate::harness::Transcript;

/// Fixes arguments of a two- or three-argument function.
///
/// Open positions are written `__`. Fixing every argument yields a thunk.
#[macro_export]
macro_rules! partial {
    // Three arguments. Arms with placeholders come before the arms whose
    // `expr` fragments would also swallow `__`.
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::core::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::core::clone::Clone::clone(&second), third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::core::clone::Clone::clone(&third))
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let (first, second) = ($first, $second);
        move |third| {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                third,
            )
        }
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let (first, third) = ($first, $third);
        move |second| {
            function(
                ::core::clone::Clone::clone(&first),
                second,
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let (second, third) = ($second, $third);
        move |first| {
            function(
                first,
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let (first, second, third) = ($first, $second, $third);
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};

    // Two arguments.
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::core::clone::Clone::clone(&first), second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::core::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let (first, second) = ($first, $second);
        move || {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
            )
        }
    }};
}

/// Joins three words without separators.
#[must_use]
pub fn join3(first: &str, second: &str, third: &str) -> String {
    [first, second, third].concat()
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["Hello World"];

/// Pre-applies the first word of a three-word join.
pub fn demo(out: &mut Transcript) {
    let hello = crate::partial!(join3, "Hello", __, __);
    out.line(hello(" ", "World"));
}
