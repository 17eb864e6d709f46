use serde::{Deserialize, Serialize};

/// The three fixed upstream datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Armentieres,
    Lille,
    Roubaix,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Armentieres, SourceKind::Lille, SourceKind::Roubaix];

    pub fn tag(&self) -> &'static str {
        match self {
            SourceKind::Armentieres => "armentieres",
            SourceKind::Lille => "lille",
            SourceKind::Roubaix => "roubaix",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Endpoint plus the optional `where` expression sent to an explore v2.1 dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub endpoint: String,
    pub filter: Option<String>,
}

impl RequestTarget {
    /// Full URL with the filter percent-encoded, or the bare endpoint when there is no filter.
    pub fn to_url(&self) -> String {
        match &self.filter {
            None => self.endpoint.clone(),
            Some(filter) => match url::Url::parse(&self.endpoint) {
                Ok(mut url) => {
                    url.query_pairs_mut().append_pair("where", filter);
                    url.to_string()
                }
                Err(_) => format!("{}?where={}", self.endpoint, filter),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// 建造年代：來源可能給整數年份，也可能是自由文字（例如 "XVIIe siècle"）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datation {
    Year(i64),
    Text(String),
}

/// Canonical monument shape shared by every source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Monument {
    pub id: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "type")]
    pub monument_type: Option<String>,
    pub municipality: Option<String>,
    pub date: Option<Datation>,
}

/// Optional query dimensions supplied by the caller.
///
/// Geographic filtering only applies when both `lat` and `lon` are set;
/// `radius_meters` falls back to 0 in that case and is ignored otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub municipality: Option<String>,
    pub year: Option<i64>,
    pub monument_type: Option<String>,
    pub id: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_meters: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub center: Coordinates,
    pub radius_meters: f64,
}

impl FilterCriteria {
    pub fn geo_filter(&self) -> Option<GeoFilter> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoFilter {
                center: Coordinates::new(lat, lon),
                radius_meters: self.radius_meters.unwrap_or(0.0),
            }),
            _ => None,
        }
    }
}
