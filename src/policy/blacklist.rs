//! Blacklist construction and key matching.

/// Sentinel string substituted for every redacted value.
pub const PLACEHOLDER: &str = "*sensitive*";

/// Built-in sensitive-fragment list.
///
/// A key is considered sensitive when its lower-cased form contains any of
/// these fragments as a substring. Note that `"key"` matches generously
/// (`api_key`, `secret_key`, but also `keyboard`); callers who find that too
/// aggressive can remove it via the exclude list.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "password",
    "passwd",
    "secret",
    "token",
    "authorization",
    "credential",
    "key",
    "cookie",
    "session",
    "cpf",
    "cnpj",
    "ssn",
];

// =============================================================================
// RedactionPolicy - immutable matcher resolved at construction
// =============================================================================

/// Decides whether a key name is sensitive.
///
/// The effective blacklist is the default list minus the caller's exclusions
/// plus the caller's additions. Fragments are lower-cased once here so the
/// per-key check only lower-cases the key. Duplicates in the effective list
/// are tolerated; substring matching makes them harmless.
///
/// A policy is built once per filter instance and never changes afterwards.
#[derive(Clone, Debug)]
pub struct RedactionPolicy {
    blacklist: Vec<String>,
    whitelist: Vec<String>,
    placeholder: &'static str,
}

impl RedactionPolicy {
    /// Builds a policy from additions, exclusions, and whitelist fragments.
    ///
    /// Exclusions remove default fragments by case-insensitive equality;
    /// additions are appended verbatim.
    #[must_use]
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S], whitelist: &[S]) -> Self {
        let exclude: Vec<String> = exclude
            .iter()
            .map(|fragment| fragment.as_ref().to_lowercase())
            .collect();

        let mut blacklist: Vec<String> = DEFAULT_BLACKLIST
            .iter()
            .map(|fragment| (*fragment).to_string())
            .filter(|fragment| !exclude.contains(fragment))
            .collect();
        blacklist.extend(
            include
                .iter()
                .map(|fragment| fragment.as_ref().to_lowercase()),
        );

        Self {
            blacklist,
            whitelist: whitelist
                .iter()
                .map(|fragment| fragment.as_ref().to_lowercase())
                .collect(),
            placeholder: PLACEHOLDER,
        }
    }

    /// Returns true iff the key is blacklisted and not whitelisted.
    ///
    /// Total over any string input; there are no error conditions.
    #[must_use]
    pub fn is_sensitive(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        Self::matches(&self.blacklist, &key) && !Self::matches(&self.whitelist, &key)
    }

    /// The sentinel substituted for redacted values.
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    fn matches(fragments: &[String], lowercase_key: &str) -> bool {
        fragments
            .iter()
            .any(|fragment| lowercase_key.contains(fragment.as_str()))
    }
}

impl Default for RedactionPolicy {
    /// The built-in blacklist with no additions, exclusions, or whitelist.
    fn default() -> Self {
        Self::new::<&str>(&[], &[], &[])
    }
}

// =============================================================================
// Tests
// =============================================================================
