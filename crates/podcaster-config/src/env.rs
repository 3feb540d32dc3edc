use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Failure while expanding placeholders in the raw config text
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Placeholder referenced a variable that is not set and has no default
    #[error("environment variable not found: `{0}` (line {1})")]
    MissingVar(String, usize),

    /// Placeholder used a scope other than `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}` (line {1})")]
    UnsupportedScope(String, usize),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern must compile")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// A `| default("...")` suffix supplies the value used when the variable is
/// unset. Lines whose first non-blank character is `#` are copied verbatim,
/// so commented-out settings never require their variables.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(input.len());

    for (index, line) in input.split_inclusive('\n').enumerate() {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let line_number = index + 1;
        let mut failure = None;

        let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
            match resolve(captures, line_number) {
                Ok(value) => value,
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                    String::new()
                }
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }

        output.push_str(&expanded);
    }

    Ok(output)
}

fn resolve(captures: &Captures<'_>, line_number: usize) -> Result<String, ExpandError> {
    let key = &captures[1];
    let default_value = captures.get(2).map(|m| m.as_str());

    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.is_empty() && !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_string(), line_number));
    };

    match (std::env::var(var_name), default_value) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_string()),
        (Err(_), None) => Err(ExpandError::MissingVar(var_name.to_string(), line_number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[storage]\nbucket = \"podcasts\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_supabase_credentials() {
        let vars = [
            ("SUPABASE_URL", Some("https://project.supabase.co")),
            ("SUPABASE_KEY", Some("service-role")),
        ];
        temp_env::with_vars(vars, || {
            let input = "url = \"{{ env.SUPABASE_URL }}\"\nkey = \"{{env.SUPABASE_KEY}}\"";
            let result = expand_env(input).unwrap();
            assert_eq!(result, "url = \"https://project.supabase.co\"\nkey = \"service-role\"");
        });
    }

    #[test]
    fn missing_variable_reports_name_and_line() {
        temp_env::with_var_unset("PODCASTER_MISSING", || {
            let err = expand_env("a = 1\nkey = \"{{ env.PODCASTER_MISSING }}\"").unwrap_err();
            assert_eq!(err, ExpandError::MissingVar("PODCASTER_MISSING".to_string(), 2));
        });
    }

    #[test]
    fn rejects_non_env_scope() {
        let err = expand_env("key = \"{{ secrets.KEY }}\"").unwrap_err();
        assert!(matches!(err, ExpandError::UnsupportedScope(ref key, 1) if key == "secrets.KEY"));
    }

    #[test]
    fn rejects_nested_env_key() {
        let err = expand_env("key = \"{{ env.A.B }}\"").unwrap_err();
        assert!(matches!(err, ExpandError::UnsupportedScope(..)));
    }

    #[test]
    fn comment_lines_are_not_expanded() {
        temp_env::with_var_unset("PODCASTER_MISSING", || {
            let input = "  # key = \"{{ env.PODCASTER_MISSING }}\"\n";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("PODCASTER_VOICE", || {
            let result = expand_env("voice = \"{{ env.PODCASTER_VOICE | default(\"alloy\") }}\"").unwrap();
            assert_eq!(result, "voice = \"alloy\"");
        });

        temp_env::with_var("PODCASTER_VOICE", Some("nova"), || {
            let result = expand_env("voice = \"{{ env.PODCASTER_VOICE | default(\"alloy\") }}\"").unwrap();
            assert_eq!(result, "voice = \"nova\"");
        });
    }

    #[test]
    fn empty_default_is_allowed() {
        temp_env::with_var_unset("PODCASTER_JOB_URL", || {
            let result = expand_env("job_url = \"{{ env.PODCASTER_JOB_URL | default(\"\") }}\"").unwrap();
            assert_eq!(result, "job_url = \"\"");
        });
    }
}
