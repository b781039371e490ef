/// PathPattern
///
/// What a migration rule matches against the inbound path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// The path equals the given string.
    Exact(&'static str),
    /// The path starts with the given string.
    Prefix(&'static str),
}

impl PathPattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(expected) => path == *expected,
            PathPattern::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

/// Target
///
/// Where a matched path is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Always the same path.
    Fixed(&'static str),
    /// The given prefix followed by the last `/`-delimited segment of the inbound path.
    /// Does not fire when that segment is empty.
    TrailingId(&'static str),
}

/// MigrationRule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationRule {
    pub pattern: PathPattern,
    pub target: Target,
}

impl MigrationRule {
    pub const fn new(pattern: PathPattern, target: Target) -> Self {
        Self { pattern, target }
    }

    /// Returns the redirect target for `path`, or `None` if this rule does not apply.
    pub fn apply(&self, path: &str) -> Option<String> {
        if !self.pattern.matches(path) {
            return None;
        }

        match self.target {
            Target::Fixed(target) => Some(target.to_string()),
            Target::TrailingId(prefix) => {
                trailing_id(path).map(|id| format!("{prefix}{id}"))
            }
        }
    }
}

/// The last `/`-delimited segment of `path`, if non-empty.
pub fn trailing_id(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}

/// RedirectDecision
///
/// Outcome of evaluating an inbound path. Computed per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    PassThrough,
    Redirect(String),
}

/// PathRewriter
///
/// Legacy URL migrations: a scope filter plus an ordered list of migration rules.
/// Each rule pairs a path pattern with a target template; the first rule that
/// produces a target wins, so a new migration is a new row in the table. Paths
/// outside the scope pass through without any rule being evaluated.
///
/// Evaluation is total: a path that no rule can handle (for example one whose
/// id segment is empty) passes through instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct PathRewriter {
    scope: &'static str,
    rules: &'static [MigrationRule],
}

/// Rules for the retired `/cms/content` URL scheme.
pub const CMS_CONTENT_RULES: &[MigrationRule] = &[
    MigrationRule::new(
        PathPattern::Prefix("/cms/content/edit/"),
        Target::TrailingId("/cms/details/"),
    ),
    MigrationRule::new(
        PathPattern::Prefix("/cms/content/"),
        Target::TrailingId("/cms/details/"),
    ),
    MigrationRule::new(
        PathPattern::Exact("/cms/content"),
        Target::Fixed("/cms/dashboard"),
    ),
];

impl PathRewriter {
    /// Migration of the CMS content section to `/cms/details`.
    pub const CMS_CONTENT: PathRewriter = PathRewriter::new("/cms/content", CMS_CONTENT_RULES);

    pub const fn new(scope: &'static str, rules: &'static [MigrationRule]) -> Self {
        Self { scope, rules }
    }

    /// in_scope
    ///
    /// True for the scope path itself and anything below it (`<scope>/...`).
    pub fn in_scope(&self, path: &str) -> bool {
        match path.strip_prefix(self.scope) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// evaluate
    ///
    /// Decides whether `path` must be redirected. First matching rule wins.
    pub fn evaluate(&self, path: &str) -> RedirectDecision {
        if !self.in_scope(path) {
            return RedirectDecision::PassThrough;
        }

        self.rules
            .iter()
            .find_map(|rule| rule.apply(path))
            .map_or(RedirectDecision::PassThrough, RedirectDecision::Redirect)
    }
}

impl Default for PathRewriter {
    fn default() -> Self {
        Self::CMS_CONTENT
    }
}
