//! Macros for last-resort debugging.
//!
//! The converters in this crate only ever report a bare [`InvalidInput`],
//! which can make it hard to find out which of several nested calls
//! rejected a value. To help with that, this module contains a macro
//! `xerr!()` that prints a backtrace to stderr if the `extra-debug` feature
//! is enabled before resolving into whatever the enclosed expression
//! resolves to. Use it wherever an error is first produced:
//!
//! ```rust,ignore
//! if digit >= base {
//!     xerr!(return Err(InvalidInput::digit(ch, pos)))
//! }
//! ```
//!
//! [`InvalidInput`]: crate::InvalidInput

#[cfg(feature = "extra-debug")]
pub use backtrace::Backtrace;

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        eprintln!(
            "--- EXTRA DEBUG ---\n{:?}\n--- EXTRA DEBUG ---",
            $crate::debug::Backtrace::new()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}
