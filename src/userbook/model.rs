use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// One user entry as stored in the backing file.
///
/// The on-disk keys are `nome`, `idade` and `email`. `age` is kept signed so a
/// hand-edited file with an out-of-range value still loads; the range is only
/// enforced when adding. Keys other than these are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: i64,
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Case-insensitive substring match on name or email. `term_lower` must
    /// already be lowercased.
    pub fn matches_term(&self, term_lower: &str) -> bool {
        self.name.to_lowercase().contains(term_lower)
            || self.email.to_lowercase().contains(term_lower)
    }

    /// Case-insensitive exact match on the name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// The dataset written by `create`.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new("João", 25, "joao@email.com"),
        Record::new("Maria", 30, "maria@email.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_file_keys() {
        let record = Record::new("Ana", 20, "ana@x.com");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["idade"], 20);
        assert_eq!(json["email"], "ana@x.com");
    }

    #[test]
    fn name_match_ignores_case() {
        let record = Record::new("Ana", 20, "ana@x.com");
        assert!(record.has_name("ANA"));
        assert!(!record.has_name("An"));
    }

    #[test]
    fn term_matches_name_or_email() {
        let record = Record::new("Maria", 30, "mm@email.com");
        assert!(record.matches_term("ari"));
        assert!(record.matches_term("mm@"));
        assert!(!record.matches_term("joao"));
    }

    #[test]
    fn unknown_keys_are_carried_through() {
        let json = r#"{"nome": "Ana", "idade": 20, "email": "ana@x.com", "telefone": "123"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra["telefone"], "123");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["telefone"], "123");
        assert!(serde_json::to_value(Record::new("Bia", 30, "bia@x.com"))
            .unwrap()
            .get("telefone")
            .is_none());
    }
}
