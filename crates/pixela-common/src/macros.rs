//! Convenience macros for early returns with `PixelaError`

/// Equivalent to `anyhow::bail!` but for `PixelaError`
///
/// Accepts a message literal, a format string with arguments, or any
/// expression convertible into `PixelaError`.
///
/// # Examples
///
/// ```rust
/// use pixela_common::{bail, PixelaError, Result};
///
/// fn reject(quantity: &str) -> Result<()> {
///     if quantity.is_empty() {
///         bail!(PixelaError::validation_field("quantity is empty", "quantity"));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::PixelaError::new($msg))
    };
    ($fmt:literal, $($arg:tt)*) => {
        return Err($crate::PixelaError::new(format!($fmt, $($arg)*)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::PixelaError::from($err))
    };
}

/// Equivalent to `anyhow::ensure!` but for `PixelaError`
///
/// # Examples
///
/// ```rust
/// use pixela_common::{ensure, PixelaError, Result};
///
/// fn positive(value: u32) -> Result<u32> {
///     ensure!(value > 0, PixelaError::validation("value must be positive"));
///     Ok(value)
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::PixelaError::new($msg));
        }
    };
    ($cond:expr, $fmt:literal, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::PixelaError::new(format!($fmt, $($arg)*)));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($crate::PixelaError::from($err));
        }
    };
}
