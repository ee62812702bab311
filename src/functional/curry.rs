//! Currying.
//!
//! A curried function takes its arguments one at a time, returning a new
//! function after each. Fixing the leading arguments yields a more
//! specialised function that can be reused.
//!
//! [`curry2!`](crate::curry2) and [`curry3!`](crate::curry3) convert an
//! ordinary function. Every intermediate closure is `Fn`, so a partially
//! applied function can be called any number of times; captured arguments
//! are cloned on each call.

use std::fmt::Display;

use crate::harness::Transcript;

/// Curries a two-argument function: `curry2!(f)(a)(b) == f(a, b)`.
///
/// The first argument must be [`Clone`].
///
/// # Examples
///
/// ```rust
/// use patternbook::curry2;
///
/// let power = curry2!(|base: u32, exponent: u32| base.pow(exponent));
/// let of_two = power(2);
///
/// assert_eq!(of_two(3), 8);
/// assert_eq!(of_two(10), 1024);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::core::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// The first two arguments must be [`Clone`].
///
/// # Examples
///
/// ```rust
/// use patternbook::curry3;
///
/// let join = curry3!(|a: &str, b: &str, c: &str| format!("{a}{b}{c}"));
/// let hello = join("Hello");
///
/// assert_eq!(hello(" ")("World"), "Hello World");
/// assert_eq!(hello(", ")("Rust"), "Hello, Rust");
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::core::clone::Clone::clone(&first),
                        ::core::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Concatenates three displayable values.
pub fn concat3(first: impl Display, second: impl Display, third: impl Display) -> String {
    format!("{first}{second}{third}")
}

/// Formats a CSS color, e.g. `rgb(255,0,0)`.
#[must_use]
pub fn rgb(red: u8, green: u8, blue: u8) -> String {
    format!("rgb({red},{green},{blue})")
}

/// A hand-curried multiplier: `multiply(x)(y) == x * y`.
///
/// ```rust
/// use patternbook::functional::curry::multiply;
///
/// let triple = multiply(3);
/// assert_eq!(triple(7), 21);
/// ```
pub fn multiply(factor: i64) -> impl Fn(i64) -> i64 {
    move |value| factor * value
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "Hello World",
    "rgb(200,0,0)",
    "rgb(0,150,0)",
    "rgb(0,0,100)",
    "rgb(12,34,56)",
    "2",
    "4",
    "6",
    "8",
];

/// Builds a greeting step by step, specialises a color formatter, then
/// reuses a doubling function.
pub fn demo(out: &mut Transcript) {
    let join = crate::curry3!(|a: &str, b: &str, c: &str| concat3(a, b, c));
    let hello = join("Hello");
    let hello_space = hello(" ");
    out.line(hello_space("World"));

    let color = crate::curry3!(rgb);
    out.line(color(200)(0)(0));
    out.line(color(0)(150)(0));
    out.line(color(0)(0)(100));
    out.line(color(12)(34)(56));

    let multiply_by_two = multiply(2);
    for value in 1..=4 {
        out.line(multiply_by_two(value).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn curry2_matches_uncurried_call() {
        let subtract = |left: i64, right: i64| left - right;
        let curried = crate::curry2!(subtract);
        assert_eq!(curried(10)(3), subtract(10, 3));
    }

    #[rstest]
    fn partially_applied_closures_are_reusable() {
        let prefix = crate::curry2!(|head: String, tail: &str| head + tail);
        let greet = prefix("hi ".to_string());

        assert_eq!(greet("ann"), "hi ann");
        assert_eq!(greet("bob"), "hi bob");
    }

    #[rstest]
    fn curry3_specialises_in_stages() {
        let only_red = crate::curry3!(rgb)(255)(0);
        assert_eq!(only_red(0), "rgb(255,0,0)");
        assert_eq!(only_red(9), "rgb(255,0,9)");
    }

    #[rstest]
    #[case(0, 5, 0)]
    #[case(-3, 4, -12)]
    #[case(7, 1, 7)]
    fn multiply_is_curried(#[case] factor: i64, #[case] value: i64, #[case] expected: i64) {
        assert_eq!(multiply(factor)(value), expected);
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
