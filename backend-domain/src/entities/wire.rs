// Form-encoded request body
// Entries keep insertion order; one key may repeat.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    entries: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Replaces every entry under `key` with a single value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.retain(|(name, _)| name != key);
        self.entries.push((key.to_string(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_collapses_repeated_entries() {
        let mut body = FormBody::new();
        body.push("ticket_type_ids[]", "a");
        body.push("ticket_type_ids[]", "b");
        body.push("name", "GA");
        assert_eq!(body.get_all("ticket_type_ids[]"), vec!["a", "b"]);

        body.set("ticket_type_ids[]", "c");
        assert_eq!(body.get_all("ticket_type_ids[]"), vec!["c"]);
        assert_eq!(body.get("name"), Some("GA"));
        assert_eq!(body.len(), 2);
    }
}
