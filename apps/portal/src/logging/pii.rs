use std::fmt;

/// Display wrapper that masks an email address for logs.
///
/// `jane.doe@example.com` renders as `j***@example.com`. Values without an
/// `@` are fully masked.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{first}***@{domain}"),
                None => write!(f, "***@{domain}"),
            },
            None if self.0.is_empty() => Ok(()),
            None => f.write_str("[REDACTED]"),
        }
    }
}
