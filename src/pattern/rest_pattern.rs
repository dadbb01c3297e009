//! A single (path template, method set) matching rule.

use std::collections::BTreeSet;
use std::fmt;

use super::method::{HttpMethod, InvalidMethodError};
use super::path::PathTemplate;

/// Template used by [`RestPatternBuilder`] when no path is set.
pub const ANY_PATH: &str = "/**";

/// Matches requests by HTTP method and Ant-style path template.
///
/// The method set is never empty: every constructor treats an empty
/// collection as "all methods".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestPattern {
    template: PathTemplate,
    methods: BTreeSet<HttpMethod>,
}

impl RestPattern {
    /// Create a pattern for `template` restricted to `methods`.
    ///
    /// Accepts anything iterable: an array, a `Vec`, a `HashSet`, or a single
    /// `Option`. An empty collection selects every method.
    pub fn new(template: impl Into<String>, methods: impl IntoIterator<Item = HttpMethod>) -> Self {
        let mut methods: BTreeSet<HttpMethod> = methods.into_iter().collect();
        if methods.is_empty() {
            methods.extend(HttpMethod::ALL);
        }
        Self {
            template: PathTemplate::new(template),
            methods,
        }
    }

    /// Create a pattern for `template` matching a single method.
    pub fn of(template: impl Into<String>, method: HttpMethod) -> Self {
        Self::new(template, [method])
    }

    /// Create a pattern for `template` matching every method.
    pub fn from_template(template: impl Into<String>) -> Self {
        Self::new(template, HttpMethod::ALL)
    }

    /// Create a pattern from textual method tokens, as found in config files.
    pub fn parse<I, S>(template: impl Into<String>, tokens: I) -> Result<Self, InvalidMethodError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let methods = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<HttpMethod>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(template, methods))
    }

    pub fn builder() -> RestPatternBuilder {
        RestPatternBuilder::default()
    }

    /// Returns true if `method` is selected and `path` satisfies the template.
    pub fn matches(&self, method: HttpMethod, path: &str) -> bool {
        self.methods.contains(&method) && self.template.matches(path)
    }

    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    pub fn methods(&self) -> &BTreeSet<HttpMethod> {
        &self.methods
    }
}

impl fmt::Display for RestPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.methods.len() == HttpMethod::ALL.len() {
            return write!(f, "* {}", self.template);
        }
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", method)?;
        }
        write!(f, " {}", self.template)
    }
}

/// Accumulates methods one at a time; see [`RestPattern::builder`].
#[derive(Debug, Clone)]
pub struct RestPatternBuilder {
    path: String,
    methods: BTreeSet<HttpMethod>,
}

impl Default for RestPatternBuilder {
    fn default() -> Self {
        Self {
            path: ANY_PATH.to_string(),
            methods: BTreeSet::new(),
        }
    }
}

impl RestPatternBuilder {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.methods.insert(method);
        self
    }

    pub fn get(self) -> Self {
        self.method(HttpMethod::Get)
    }

    pub fn post(self) -> Self {
        self.method(HttpMethod::Post)
    }

    pub fn put(self) -> Self {
        self.method(HttpMethod::Put)
    }

    pub fn delete(self) -> Self {
        self.method(HttpMethod::Delete)
    }

    pub fn patch(self) -> Self {
        self.method(HttpMethod::Patch)
    }

    pub fn trace(self) -> Self {
        self.method(HttpMethod::Trace)
    }

    pub fn options(self) -> Self {
        self.method(HttpMethod::Options)
    }

    pub fn head(self) -> Self {
        self.method(HttpMethod::Head)
    }

    pub fn all(self) -> Self {
        self.get().post().put().delete().patch().trace().options().head()
    }

    /// Falls back to every method if none were toggled.
    pub fn build(self) -> RestPattern {
        RestPattern::new(self.path, self.methods)
    }
}
