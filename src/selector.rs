use std::collections::HashSet;
use std::fmt;

/// An allow-list parsed from a comma separated command-line value.
///
/// An empty selector accepts everything. Members keep the order they were
/// first seen in, duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    items: Vec<String>,
}

impl Selector {
    pub fn parse(raw: &str) -> Self {
        Self::from_values(raw.split(','))
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for value in values {
            let token = value.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.to_string()) {
                items.push(token.to_string());
            }
        }
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// True when the selector is empty or `value` is one of its members.
    pub fn accepts(&self, value: &str) -> bool {
        self.is_empty() || self.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.join(", "))
    }
}
