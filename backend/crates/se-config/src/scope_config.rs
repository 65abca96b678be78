use serde::Deserialize;

/// One `[[scopes]]` entry of the tenant directory
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeConfig {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub expected_aggregate: String,
}

impl ScopeConfig {
    pub(crate) fn defaults() -> Vec<ScopeConfig> {
        vec![
            ScopeConfig {
                id: 101,
                display_name: "営業部".to_string(),
                expected_aggregate: "¥955,000".to_string(),
            },
            ScopeConfig {
                id: 102,
                display_name: "開発部".to_string(),
                expected_aggregate: "¥835,000".to_string(),
            },
            ScopeConfig {
                id: 103,
                display_name: "マーケティング部".to_string(),
                expected_aggregate: "¥240,000".to_string(),
            },
        ]
    }
}
