//! Metrics collected over a single run

use std::fmt;

/// The value of a metric, which also determines its type tag
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Str(String),
    Int(i64),
}

impl MetricValue {
    /// The type tag the monitoring agent expects
    pub fn kind(&self) -> &'static str {
        match self {
            MetricValue::Str(_) => "string",
            MetricValue::Int(_) => "int",
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetricValue::Str(s) => write!(f, "{}", s),
            MetricValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(i: i64) -> MetricValue {
        MetricValue::Int(i)
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> MetricValue {
        MetricValue::Str(s)
    }
}

impl<'a> From<&'a str> for MetricValue {
    fn from(s: &'a str) -> MetricValue {
        MetricValue::Str(s.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: String,
    pub value: MetricValue,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "metric {} {} {}", self.name, self.value.kind(), self.value)
    }
}

/// Metrics in the order they were first recorded
///
/// Names are unique: recording a name a second time replaces the value but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    metrics: Vec<Metric>,
}

impl MetricSet {
    pub fn new() -> MetricSet {
        MetricSet::default()
    }

    pub fn record<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<MetricValue>,
    {
        let name = name.into();
        let value = value.into();
        match self.metrics.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.value = value,
            None => self.metrics.push(Metric { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.iter().find(|m| m.name == name).map(|m| &m.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
