//! Function composition.
//!
//! [`compose!`](crate::compose) builds a new function from existing ones,
//! applying them right to left: `compose!(f, g)(x) == f(g(x))`.
//! [`pipe!`](crate::pipe) threads a value through functions left to right.
//!
//! When the functions are only known at runtime, [`compose_all`] and
//! [`pipe_all`] fold over a list of endomorphisms instead.
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe is flipped compose**: `pipe!(x, f, g) == compose!(g, f)(x)`

use crate::harness::Transcript;

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. A single function is returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use patternbook::compose;
///
/// fn add_one(x: i64) -> i64 { x + 1 }
/// fn double(x: i64) -> i64 { x * 2 }
///
/// let double_after_add = compose!(double, add_one);
/// assert_eq!(double_after_add(10), 22);
///
/// let length_of = compose!(|text: String| text.len(), |n: i64| n.to_string());
/// assert_eq!(length_of(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}

/// Applies functions to a value left to right.
///
/// `pipe!(x, f, g)` is `g(f(x))`. With no functions the value is returned.
///
/// # Examples
///
/// ```rust
/// use patternbook::pipe;
///
/// fn add_one(x: i64) -> i64 { x + 1 }
/// fn double(x: i64) -> i64 { x * 2 }
///
/// assert_eq!(pipe!(10, double, add_one), 21);
/// assert_eq!(pipe!(10), 10);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        ($function)($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!(($function)($value), $($rest),+)
    };
}

/// Composes a runtime list of functions right to left.
///
/// The last function runs first. An empty list yields the identity.
///
/// # Examples
///
/// ```rust
/// use patternbook::functional::compose::compose_all;
///
/// let add_one = |x: i64| x + 1;
/// let double = |x: i64| x * 2;
/// let steps: [&dyn Fn(i64) -> i64; 3] = [&double, &add_one, &add_one];
///
/// assert_eq!(compose_all(steps)(10), 24);
/// ```
pub fn compose_all<T, F>(functions: impl IntoIterator<Item = F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |accumulator, function| function(accumulator))
    }
}

/// Composes a runtime list of functions left to right.
///
/// The first function runs first. An empty list yields the identity.
pub fn pipe_all<T, F>(functions: impl IntoIterator<Item = F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .fold(input, |accumulator, function| function(accumulator))
    }
}

/// Returns its argument.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// ```rust
/// use patternbook::functional::compose::flip;
///
/// let subtract = |left: i64, right: i64| left - right;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Adds one.
#[must_use]
pub const fn add_one(value: i64) -> i64 {
    value + 1
}

/// Doubles.
#[must_use]
pub const fn double(value: i64) -> i64 {
    value * 2
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["22", "30", "240", "25", "240"];

/// Composes two functions, then folds runtime lists in both directions.
pub fn demo(out: &mut Transcript) {
    let double_after_add = crate::compose!(double, add_one);
    out.line(double_after_add(10).to_string());

    let five_adds_then_double: [fn(i64) -> i64; 6] =
        [double, add_one, add_one, add_one, add_one, add_one];
    let triple_double: [fn(i64) -> i64; 3] = [double, double, double];

    out.line(compose_all(five_adds_then_double)(10).to_string());
    out.line(compose_all(triple_double)(30).to_string());
    out.line(pipe_all(five_adds_then_double)(10).to_string());
    out.line(pipe_all(triple_double)(30).to_string());
}
