// File: crates/rankchart-core/src/series.rs
// Summary: Rank series model (samples, series, ordered series set) and the JSON payload shapes.
// Notes:
// - `WirePayload` keeps the received bytes next to the decoded `Payload`; the bytes are what gets
//   posted back, since re-serializing would turn integer ranks into floats.
// - `SeriesSet` keeps payload order; identifiers are never re-sorted.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::time::TimeParser;

/// Identifier given to the lone series of a list-shaped payload.
pub const SINGLE_SERIES_ID: &str = "rank";

/// One `[dateString, rank]` pair as it appears on the wire.
pub type RawSample = (String, f64);

/// Primary endpoint payload: a single list of samples or an ordered map of named lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Single(Vec<RawSample>),
    Multi(IndexMap<String, Vec<RawSample>>),
}

impl Payload {
    pub fn from_slice(bytes: &[u8]) -> ChartResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Payload::Multi(_))
    }

    /// Parse every date token and build the ordered series set.
    pub fn parse_series(&self, parser: &TimeParser) -> ChartResult<SeriesSet> {
        let mut set = SeriesSet::new();
        match self {
            Payload::Single(raw) => {
                set.insert(Series::from_raw(SINGLE_SERIES_ID, raw, parser)?)?;
            }
            Payload::Multi(map) => {
                for (id, raw) in map {
                    set.insert(Series::from_raw(id.as_str(), raw, parser)?)?;
                }
            }
        }
        Ok(set)
    }
}

/// A decoded payload together with the exact bytes it was decoded from.
#[derive(Clone, Debug, PartialEq)]
pub struct WirePayload {
    bytes: Vec<u8>,
    payload: Payload,
}

impl WirePayload {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> ChartResult<Self> {
        let bytes = bytes.into();
        let payload = Payload::from_slice(&bytes)?;
        Ok(Self { bytes, payload })
    }

    /// The body as received, byte for byte.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// One rank observation. Lower ranks are better and drawn nearer the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: NaiveDate,
    pub rank: f64,
}

impl Sample {
    pub fn new(time: NaiveDate, rank: f64) -> Self {
        Self { time, rank }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    id: String,
    samples: Vec<Sample>,
}

impl Series {
    /// Construct a series, enforcing finite non-negative ranks and strictly increasing times.
    /// Zero and fractional ranks are valid; only negative and non-finite ones are rejected.
    pub fn try_new(id: impl Into<String>, samples: Vec<Sample>) -> ChartResult<Self> {
        let id = id.into();
        for s in &samples {
            if !s.rank.is_finite() || s.rank < 0.0 {
                return Err(ChartError::Payload(format!(
                    "series `{id}`: rank {} at {} is not a finite non-negative number",
                    s.rank, s.time
                )));
            }
        }
        if let Some(w) = samples.windows(2).find(|w| w[1].time <= w[0].time) {
            return Err(ChartError::Payload(format!(
                "series `{id}`: sample times must be strictly increasing ({} then {})",
                w[0].time, w[1].time
            )));
        }
        Ok(Self { id, samples })
    }

    pub fn from_raw(id: &str, raw: &[RawSample], parser: &TimeParser) -> ChartResult<Self> {
        let samples = raw
            .iter()
            .map(|(token, rank)| parser.parse(token).map(|t| Sample::new(t, *rank)))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::try_new(id, samples)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Series keyed by identifier, in insertion (payload) order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    series: IndexMap<String, Series>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_from_series(series: impl IntoIterator<Item = Series>) -> ChartResult<Self> {
        let mut set = Self::new();
        for s in series {
            set.insert(s)?;
        }
        Ok(set)
    }

    /// Append a series; identifiers must be unique.
    pub fn insert(&mut self, series: Series) -> ChartResult<()> {
        if self.series.contains_key(series.id()) {
            return Err(ChartError::Payload(format!("duplicate series identifier `{}`", series.id())));
        }
        self.series.insert(series.id().to_string(), series);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Series> {
        self.series.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
