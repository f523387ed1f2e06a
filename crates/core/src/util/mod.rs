use crate::error::{HexError, Result};
use std::fmt::Display;
use strum::IntoEnumIterator;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took, and evaluates to the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Parse an enum variant from its name. Matching ignores case and
/// underscores, so `odd_r`, `OddR` and `oddr` are all the same thing.
pub(crate) fn parse_variant<T: IntoEnumIterator + Display>(s: &str) -> Result<T> {
    fn normalize(s: &str) -> String {
        s.chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect()
    }

    let needle = normalize(s);
    T::iter()
        .find(|variant| normalize(&variant.to_string()) == needle)
        .ok_or_else(|| HexError::InvalidOrientation(s.to_owned()))
}
