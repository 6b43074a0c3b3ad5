use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Aggregates validation messages, optionally grouped under a route key
/// (config key, declaration id) so every problem is reported at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message at this level.
    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    /// Record a message under `route`.
    pub fn add_for(&mut self, route: impl Into<String>, message: impl ToString) {
        self.children
            .entry(route.into())
            .or_default()
            .add(message);
    }

    /// Graft another tree under `route`, dropping it if empty.
    pub fn merge_for(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let entry = self.children.entry(route.into()).or_default();
        entry.messages.extend(other.messages);
        for (key, child) in other.children {
            entry.merge_for(key, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `route: message` lines, depth-first in route order.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        self.flatten_into(None, &mut out);
        out
    }

    fn flatten_into(&self, prefix: Option<&str>, out: &mut Vec<String>) {
        for message in &self.messages {
            match prefix {
                Some(route) => out.push(format!("{route}: {message}")),
                None => out.push(message.clone()),
            }
        }

        for (key, child) in &self.children {
            let route = match prefix {
                Some(route) => format!("{route}.{key}"),
                None => key.clone(),
            };
            child.flatten_into(Some(&route), out);
        }
    }

    /// `Ok(())` when nothing was recorded, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.flatten();
        write!(f, "{}", lines.join("; "))
    }
}

impl std::error::Error for ErrorTree {}

///
/// err
/// push a formatted message onto an ErrorTree
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
