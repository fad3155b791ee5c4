//! Wire types for dictionary entries.
//!
//! Every field defaults when missing so a sparse entry still decodes; the
//! loader decides what "no definition" means.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Definition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
}

impl DictionaryEntry {
    /// The first meaning's first definition, if it is a non-empty string.
    pub fn first_definition(&self) -> Option<&str> {
        self.meanings
            .first()?
            .definitions
            .first()?
            .definition
            .as_deref()
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_api_shape() {
        let body = r#"[{
            "word": "apple",
            "phonetics": [],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "A common, round fruit.", "synonyms": [], "antonyms": []},
                    {"definition": "The tree of the apple."}
                ]
            }]
        }]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "apple");
        assert_eq!(entries[0].meanings[0].part_of_speech.as_deref(), Some("noun"));
        assert_eq!(entries[0].first_definition(), Some("A common, round fruit."));
    }

    #[test]
    fn test_missing_fields_default() {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(r#"[{"word": "x"}]"#).unwrap();
        assert!(entries[0].meanings.is_empty());
        assert_eq!(entries[0].first_definition(), None);
    }

    #[test]
    fn test_empty_definition_is_none() {
        let entry = DictionaryEntry {
            word: "x".into(),
            meanings: vec![Meaning {
                part_of_speech: None,
                definitions: vec![Definition {
                    definition: Some(String::new()),
                    example: None,
                }],
            }],
        };
        assert_eq!(entry.first_definition(), None);
    }

    #[test]
    fn test_meaning_without_definitions() {
        let entry = DictionaryEntry {
            word: "x".into(),
            meanings: vec![Meaning::default()],
        };
        assert_eq!(entry.first_definition(), None);
    }
}
