//! Route pattern matching for the gate's public-route set.

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must match the path segment exactly.
    Literal(String),
    /// Matches any single non-empty path segment.
    Param,
}

/// A parsed route pattern such as `/blog/edit/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Segments wrapped in `{}` match any value.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('{') && s.ends_with('}') {
                    Segment::Param
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Whether the pathname matches this pattern exactly (no prefix match).
    pub fn matches(&self, pathname: &str) -> bool {
        let parts: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(parts.iter())
            .all(|(seg, part)| match seg {
                Segment::Literal(lit) => lit == part,
                Segment::Param => true,
            })
    }
}

/// A set of route patterns.
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    patterns: Vec<RoutePattern>,
}

impl RouteSet {
    /// Build a set from pattern strings.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| RoutePattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// Whether any pattern in the set matches the pathname.
    pub fn contains(&self, pathname: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(pathname))
    }
}
