use crate::draw::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "activityName")]
    pub activity_name: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// The name of the column in the header row.
    pub column: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PrizeConfig {
    pub name: String,
    #[serde(rename = "count")]
    _count: JSValue,
}

impl PrizeConfig {
    pub fn new(name: &str, count: u64) -> PrizeConfig {
        PrizeConfig {
            name: name.to_string(),
            _count: JSValue::from(count),
        }
    }

    pub fn count(&self) -> DrawCliResult<usize> {
        read_js_int(&self._count).context(ParsingJsonNumberSnafu {
            what: format!("the count of prize {:?}", self.name),
        })
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawRules {
    #[serde(rename = "randomSeed")]
    pub random_seed: Option<String>,
}

impl DrawRules {
    /// The seed of the draw, if it should be reproducible.
    pub fn seed(&self) -> DrawCliResult<Option<u64>> {
        match self.random_seed.as_deref().map(|s| s.trim()) {
            None | Some("") => Ok(None),
            Some(s) => match s.parse::<u64>() {
                Ok(x) => Ok(Some(x)),
                Err(_) => whatever!("randomSeed should be a positive integer, got {:?}", s),
            },
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(rename = "participantSources", default)]
    pub participant_sources: Vec<ParticipantSource>,
    #[serde(default)]
    pub prizes: Vec<PrizeConfig>,
    #[serde(default)]
    pub rules: DrawRules,
}

impl DrawConfig {
    pub fn activity_name(&self) -> String {
        match self.output_settings.activity_name.as_deref().map(|s| s.trim()) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => DEFAULT_ACTIVITY.to_string(),
        }
    }
}

pub fn read_config(path: &str) -> DrawCliResult<DrawConfig> {
    let config_str = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: DrawConfig = serde_json::from_str(&config_str).context(ParsingJsonSnafu {})?;
    Ok(config)
}

pub fn read_summary(path: &str) -> DrawCliResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

/// Reads a `NAME=COUNT` command line argument.
pub fn parse_prize_arg(arg: &str) -> DrawCliResult<PrizeConfig> {
    let (name, count) = arg.rsplit_once('=').context(InvalidPrizeSnafu { arg })?;
    let count = count
        .trim()
        .parse::<u64>()
        .ok()
        .context(InvalidPrizeSnafu { arg })?;
    Ok(PrizeConfig::new(name.trim(), count))
}

pub fn infer_provider(path: &str) -> String {
    let lower = path.to_lowercase();
    if lower.ends_with(".csv") || lower.ends_with(".txt") {
        "csv".to_string()
    } else {
        "xlsx".to_string()
    }
}

fn read_js_int(x: &JSValue) -> Option<usize> {
    match x {
        JSValue::Number(n) => n.as_u64().and_then(|x| usize::try_from(x).ok()),
        JSValue::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let js = r#"{
            "outputSettings": { "activityName": " Year-end party ", "outputDirectory": "out" },
            "participantSources": [
                { "provider": "xlsx", "filePath": "staff.xlsx", "column": "Name", "excelWorksheetName": "Sheet1" },
                { "provider": "csv", "filePath": "guests.csv" }
            ],
            "prizes": [ { "name": "Grand prize", "count": 1 }, { "name": "2nd", "count": " 3 " } ],
            "rules": { "randomSeed": "42" }
        }"#;
        let config: DrawConfig = serde_json::from_str(js).unwrap();
        assert_eq!(config.activity_name(), "Year-end party");
        assert_eq!(config.output_settings.output_directory, Some("out".to_string()));
        assert_eq!(config.participant_sources.len(), 2);
        assert_eq!(config.participant_sources[1].column, None);
        assert_eq!(config.prizes[0].count().unwrap(), 1);
        assert_eq!(config.prizes[1].count().unwrap(), 3);
        assert_eq!(config.rules.seed().unwrap(), Some(42));
    }

    #[test]
    fn minimal_config() {
        let config: DrawConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DrawConfig::default());
        assert_eq!(config.activity_name(), DEFAULT_ACTIVITY);
        assert_eq!(config.rules.seed().unwrap(), None);
    }

    #[test]
    fn bad_numbers() {
        let config: DrawConfig = serde_json::from_str(
            r#"{ "prizes": [ { "name": "x", "count": "many" }, { "name": "y", "count": -1 } ],
                 "rules": { "randomSeed": "abc" } }"#,
        )
        .unwrap();
        assert!(matches!(
            config.prizes[0].count(),
            Err(DrawCliError::ParsingJsonNumber { .. })
        ));
        assert!(config.prizes[1].count().is_err());
        assert!(config.rules.seed().is_err());
    }

    // Counts that do not fit the platform's usize are rejected, not truncated.
    #[test]
    fn large_numbers() {
        for x in [1u64 << 32, (1u64 << 32) + 3, u64::MAX] {
            assert_eq!(read_js_int(&JSValue::from(x)), usize::try_from(x).ok());
            assert_eq!(PrizeConfig::new("x", x).count().ok(), usize::try_from(x).ok());
        }
        assert_eq!(read_js_int(&JSValue::from(2.5)), None);
    }

    #[test]
    fn prize_args() {
        assert_eq!(
            parse_prize_arg("Grand prize = 2").unwrap(),
            PrizeConfig::new("Grand prize", 2)
        );
        assert_eq!(
            parse_prize_arg("a=b=3").unwrap(),
            PrizeConfig::new("a=b", 3)
        );
        assert!(matches!(
            parse_prize_arg("Grand prize"),
            Err(DrawCliError::InvalidPrize { .. })
        ));
        assert!(parse_prize_arg("x=two").is_err());
    }

    #[test]
    fn providers() {
        assert_eq!(infer_provider("people.CSV"), "csv");
        assert_eq!(infer_provider("people.xlsx"), "xlsx");
        assert_eq!(infer_provider("people"), "xlsx");
    }
}
