use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One record from the measurement store: a timestamp and both recovery percentages.
///
/// The store has served two column spellings over time; both are accepted on input
/// (`totalValue`/`roValue` and `total_etp`/`etp_ro`). Output always uses the first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Date-like label, kept verbatim. See [`date_label`] for the rendered form.
    pub date: String,
    #[serde(
        rename = "totalValue",
        alias = "total_etp",
        deserialize_with = "de_f64_from_string_or_number"
    )]
    pub total_etp: f64,
    #[serde(
        rename = "roValue",
        alias = "etp_ro",
        deserialize_with = "de_f64_from_string_or_number"
    )]
    pub etp_ro: f64,
}

impl Measurement {
    pub fn new(date: impl Into<String>, total_etp: f64, etp_ro: f64) -> Self {
        Self {
            date: date.into(),
            total_etp,
            etp_ro,
        }
    }

    /// Value of the given series in this record.
    #[inline]
    pub fn value(&self, series: SeriesId) -> f64 {
        match series {
            SeriesId::TotalEtp => self.total_etp,
            SeriesId::EtpRo => self.etp_ro,
        }
    }
}

/// Serde helper: parse `f64` from either a JSON number or a numeric string.
/// SQL DECIMAL columns usually arrive as strings.
fn de_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number or a string holding a finite number")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(E::custom("non-finite measurement value"))
            }
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let v = s.trim().parse::<f64>().map_err(E::custom)?;
            self.visit_f64(v)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}

/// The two tracked quantities. Order here is plotting order and axis-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesId {
    /// Total ETP recovery (%), "series A".
    TotalEtp,
    /// ETP RO recovery (%), "series B".
    EtpRo,
}

impl SeriesId {
    pub const ALL: [SeriesId; 2] = [SeriesId::TotalEtp, SeriesId::EtpRo];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            SeriesId::TotalEtp => "Total ETP recovery(%)",
            SeriesId::EtpRo => "ETP RO Recovery(%)",
        }
    }

    /// Short name used on a dedicated axis.
    pub fn axis_name(self) -> &'static str {
        match self {
            SeriesId::TotalEtp => "Total ETP",
            SeriesId::EtpRo => "ETP RO",
        }
    }
}

/// At most one reference value per series. `None` means "no reference line".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    #[serde(rename = "totalValue", alias = "total_etp", default)]
    pub total_etp: Option<f64>,
    #[serde(rename = "roValue", alias = "etp_ro", default)]
    pub etp_ro: Option<f64>,
}

impl Benchmarks {
    pub fn get(&self, series: SeriesId) -> Option<f64> {
        match series {
            SeriesId::TotalEtp => self.total_etp,
            SeriesId::EtpRo => self.etp_ro,
        }
    }
}

/// Per-series "give this series its own axis" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisAssignment {
    #[serde(default)]
    pub total_etp: bool,
    #[serde(default)]
    pub etp_ro: bool,
}

impl AxisAssignment {
    pub fn is_dedicated(&self, series: SeriesId) -> bool {
        match series {
            SeriesId::TotalEtp => self.total_etp,
            SeriesId::EtpRo => self.etp_ro,
        }
    }

    /// True when at least one series has its own axis.
    pub fn any_dedicated(&self) -> bool {
        self.total_etp || self.etp_ro
    }

    /// Copy with one flag replaced.
    pub fn with(mut self, series: SeriesId, dedicated: bool) -> Self {
        match series {
            SeriesId::TotalEtp => self.total_etp = dedicated,
            SeriesId::EtpRo => self.etp_ro = dedicated,
        }
        self
    }
}

/// Truncate a timestamp label to its date part, e.g. `2024-01-01T05:30:00.000Z` -> `2024-01-01`.
///
/// RFC 3339 and `YYYY-MM-DD HH:MM:SS` stamps keep the calendar date as written (no timezone
/// shift). Other text starting with a `YYYY-MM-DD` date followed by `T` or a space is cut to
/// that date. Any other label is opaque and passes through unchanged.
pub fn date_label(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.date().to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.to_string();
    }
    if let (Some(head), Some(rest)) = (raw.get(..10), raw.get(10..))
        && rest.starts_with(['T', ' '])
        && let Ok(d) = NaiveDate::parse_from_str(head, "%Y-%m-%d")
    {
        return d.to_string();
    }
    raw.to_string()
}
