use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Good,
    Bad,
}

impl Verdict {
    /// Case-insensitive match on the two verdict tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("good") {
            Some(Verdict::Good)
        } else if token.eq_ignore_ascii_case("bad") {
            Some(Verdict::Bad)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::Bad => "Bad",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub heading: String,
    pub verdict: Option<Verdict>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub sections: Vec<ReportSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_assessment: Option<String>,
}

impl ReportDocument {
    pub fn verdict_counts(&self) -> (usize, usize) {
        self.sections.iter().fold((0, 0), |(good, bad), s| match s.verdict {
            Some(Verdict::Good) => (good + 1, bad),
            Some(Verdict::Bad) => (good, bad + 1),
            None => (good, bad),
        })
    }
}

/// One preview line: header name → cell, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewRow {
    cells: Vec<(String, String)>,
}

impl PreviewRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        PreviewRow { cells }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

// serde_json::Map would sort keys; rows must keep header order.
impl Serialize for PreviewRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<PreviewRow>,
}

/// Payload returned by the URL analysis endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub is_good: bool,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub raw: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_tokens() {
        assert_eq!(Verdict::from_token("good"), Some(Verdict::Good));
        assert_eq!(Verdict::from_token("GOOD"), Some(Verdict::Good));
        assert_eq!(Verdict::from_token("Bad"), Some(Verdict::Bad));
        assert_eq!(Verdict::from_token("Okay"), None);
    }

    #[test]
    fn document_json_omits_missing_summary() {
        let doc = ReportDocument {
            sections: vec![ReportSection {
                heading: "Speed".into(),
                verdict: Some(Verdict::Good),
                explanation: "Fast.".into(),
            }],
            overall_assessment: None,
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("overall_assessment").is_none());
        assert_eq!(json["sections"][0]["verdict"], "Good");
    }

    #[test]
    fn preview_row_json_keeps_header_order() {
        let row = PreviewRow::new(vec![
            ("zeta".into(), "1".into()),
            ("alpha".into(), "2".into()),
        ]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);
    }

    #[test]
    fn analysis_response_camel_case() {
        let resp: AnalysisResponse =
            serde_json::from_str(r####"{"isGood":false,"reason":"### **SEO**"}"####).unwrap();
        assert!(!resp.is_good);
        assert_eq!(resp.reason, "### **SEO**");
        assert!(resp.raw.is_none());
    }
}
