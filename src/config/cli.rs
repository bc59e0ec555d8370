use std::ffi::OsString;

/// Long flags that may also be written with a single dash (`-token x`,
/// `-domain=x`).
const LONG_FLAGS: &[&str] = &[
    "token",
    "domain",
    "api-base",
    "timeout",
    "retries",
    "retry-delay-ms",
    "verbose",
    "help",
];

/// Flags whose next argument is always their value.
const VALUE_FLAGS: &[&str] = &[
    "token",
    "domain",
    "api-base",
    "timeout",
    "retries",
    "retry-delay-ms",
];

/// Rewrites single-dash long flags into the `--flag` form clap expects.
/// The program name, the value following a value-taking flag and everything
/// after a bare `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(text) => {
                expects_value = takes_separate_value(text);
                is_single_dash_long_flag(text).then(|| OsString::from(format!("-{}", text)))
            }
            None => None,
        };

        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

/// `-token`/`--token` without an inline `=value`.
fn takes_separate_value(arg: &str) -> bool {
    let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'));
    match name {
        Some(name) if !name.contains('=') => VALUE_FLAGS.contains(&name),
        _ => false,
    }
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_rewrites_single_dash_long_flags() {
        assert_eq!(
            normalize(&["seo-metrics", "-token", "abc", "-domain=example.com"]),
            vec!["seo-metrics", "--token", "abc", "--domain=example.com"]
        );
    }

    #[test]
    fn test_leaves_short_and_double_dash_flags() {
        assert_eq!(
            normalize(&["seo-metrics", "-v", "--token", "abc", "-x"]),
            vec!["seo-metrics", "-v", "--token", "abc", "-x"]
        );
    }

    #[test]
    fn test_keeps_flag_values_verbatim() {
        assert_eq!(
            normalize(&["seo-metrics", "-token", "-domain", "-domain", "-token"]),
            vec!["seo-metrics", "--token", "-domain", "--domain", "-token"]
        );
        assert_eq!(
            normalize(&["seo-metrics", "-token=x", "-domain", "example.com"]),
            vec!["seo-metrics", "--token=x", "--domain", "example.com"]
        );
    }

    #[test]
    fn test_stops_after_separator() {
        assert_eq!(
            normalize(&["seo-metrics", "--", "-token"]),
            vec!["seo-metrics", "--", "-token"]
        );
    }
}
