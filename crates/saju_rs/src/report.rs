//! 2026 strategy report table.
//!
//! A fixed lookup keyed by day stem, deserialized from JSON. The chart
//! engine never reads it; callers pair a chart's day stem with an entry.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use saju_base::Stem;
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

const DEFAULT_REPORT_JSON: &str = include_str!("../data/report_2026.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub keywords: Vec<String>,
    pub score: u32,
    pub description: String,
}

/// Direction, action and color advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionAdvice {
    pub direction: String,
    pub action: String,
    pub color: String,
}

/// Report entry for one day stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub summary: ReportSummary,
    pub wealth: String,
    pub career: String,
    pub timing: String,
    pub qimen: DirectionAdvice,
}

/// An entry addressed to a named person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalReport {
    pub header: String,
    pub day_stem: Stem,
    #[serde(flatten)]
    pub report: StrategyReport,
}

/// Immutable map from day stem to report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    entries: HashMap<Stem, StrategyReport>,
}

impl ReportTable {
    /// Parse a JSON object keyed by stem symbol (`"甲"` .. `"癸"`).
    pub fn from_json_str(s: &str) -> Result<Self, SajuError> {
        let raw: HashMap<String, StrategyReport> =
            serde_json::from_str(s).map_err(|e| SajuError::Report(e.to_string()))?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, report) in raw {
            let stem = single_char(&key)
                .and_then(Stem::from_symbol)
                .ok_or_else(|| SajuError::Report(format!("unknown stem key '{key}'")))?;
            entries.insert(stem, report);
        }
        Ok(Self { entries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SajuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SajuError::Report(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }

    /// The bundled table, parsed on first use.
    pub fn bundled() -> Result<&'static Self, SajuError> {
        static TABLE: OnceLock<Result<ReportTable, String>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::from_json_str(DEFAULT_REPORT_JSON).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|msg| SajuError::Report(msg.clone()))
    }

    pub fn get(&self, day_stem: Stem) -> Option<&StrategyReport> {
        self.entries.get(&day_stem)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `day_stem` with a header naming `name`.
    pub fn personal_report(&self, day_stem: Stem, name: &str) -> Result<PersonalReport, SajuError> {
        let report = self.get(day_stem).ok_or_else(|| {
            SajuError::Report(format!("no report entry for stem {}", day_stem.symbol()))
        })?;
        Ok(PersonalReport {
            header: format!("{name}님의 2026 병오년 전략 리포트"),
            day_stem,
            report: report.clone(),
        })
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use saju_base::ALL_STEMS;

    #[test]
    fn bundled_table_covers_every_stem() {
        let t = ReportTable::bundled().unwrap();
        assert_eq!(t.len(), 10);
        for s in ALL_STEMS {
            assert!(t.get(s).is_some(), "missing {s}");
        }
    }

    #[test]
    fn bundled_entry_content() {
        let t = ReportTable::bundled().unwrap();
        let gap = t.get(Stem::Gap).unwrap();
        assert_eq!(gap.summary.score, 88);
        assert_eq!(gap.qimen.color, "Red & Purple");
    }

    #[test]
    fn personal_header() {
        let r = ReportTable::bundled()
            .unwrap()
            .personal_report(Stem::Byeong, "홍길동")
            .unwrap();
        assert_eq!(r.header, "홍길동님의 2026 병오년 전략 리포트");
        assert_eq!(r.report.summary.score, 78);
    }

    #[test]
    fn rejects_unknown_key() {
        let doc = r#"{"X": {
            "summary": {"keywords": [], "score": 1, "description": ""},
            "wealth": "", "career": "", "timing": "",
            "qimen": {"direction": "", "action": "", "color": ""}
        }}"#;
        let err = ReportTable::from_json_str(doc).unwrap_err();
        assert!(err.to_string().contains("unknown stem key 'X'"));
        assert_eq!(err.kind(), ErrorKind::Report);
    }

    #[test]
    fn missing_entry_is_error() {
        let t = ReportTable::from_json_str("{}").unwrap();
        assert!(t.is_empty());
        let err = t.personal_report(Stem::Gap, "n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Report);
    }
}
