use std::fmt;

/// Write a nested entity under `label`, indenting each of its lines.
///
/// Keeps composite renderings (reservation → guest → …) readable while every
/// entity only knows how to render its own fields.
pub(crate) fn write_nested(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &dyn fmt::Display,
) -> fmt::Result {
    write!(f, "\n  {label}:")?;
    for line in value.to_string().lines() {
        write!(f, "\n    {line}")?;
    }
    Ok(())
}

/// Hash key for an `f64`. Agrees with `==` because entities never hold NaN
/// or `-0.0`.
pub(crate) fn float_key(value: f64) -> u64 {
    value.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair;

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Pair\n  left: 1\n  right: 2")
        }
    }

    struct Wrapper;

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Wrapper")?;
            write_nested(f, "pair", &Pair)
        }
    }

    #[test]
    fn nested_lines_are_indented() {
        assert_eq!(
            Wrapper.to_string(),
            "Wrapper\n  pair:\n    Pair\n      left: 1\n      right: 2"
        );
    }

    #[test]
    fn float_key_is_stable() {
        assert_eq!(float_key(500.0), float_key(500.0));
        assert_ne!(float_key(500.0), float_key(600.0));
    }
}
