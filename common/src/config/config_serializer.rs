use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        best_score: u32,
        label: String,
    }

    #[test]
    fn test_yaml_keeps_field_names() {
        let serializer = YamlConfigSerializer::new();
        let record = Record {
            best_score: 17,
            label: "snake".to_string(),
        };
        let text = serializer.serialize(&record).unwrap();
        assert!(text.contains("best_score: 17"));

        let parsed: Record = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Record, String> = serializer.deserialize("best_score: [not, a, number]");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }
}
