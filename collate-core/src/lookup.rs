//! Candidate lookup over registry tables.
//!
//! A lookup hands the builder a superset of the records that can match a key,
//! always in registry order. The builder still applies the exact key
//! predicate, so both strategies produce the same joins.

use std::collections::HashMap;

use crate::registry::Registry;
use crate::types::{Calibration, Channel, Component, Gain, JoinStrategy};

/// Iterator over lookup candidates, borrowed either from a full registry
/// table or from an index bucket.
pub enum Candidates<'s, T> {
    /// Every record of a table.
    All(std::slice::Iter<'s, T>),
    /// The records of one index bucket.
    Bucket(std::slice::Iter<'s, &'s T>),
}

impl<'s, T> Iterator for Candidates<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        match self {
            Self::All(it) => it.next(),
            Self::Bucket(it) => it.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::All(it) => it.size_hint(),
            Self::Bucket(it) => it.size_hint(),
        }
    }
}

/// Tables bucketed by their most selective key field.
struct Index<'a> {
    components_by_model: HashMap<&'a str, Vec<&'a Component>>,
    channels_by_model: HashMap<&'a str, Vec<&'a Channel>>,
    gains_by_station: HashMap<&'a str, Vec<&'a Gain>>,
    calibrations_by_serial: HashMap<&'a str, Vec<&'a Calibration>>,
}

fn bucket<'a, T>(records: &'a [T], key: impl Fn(&'a T) -> &'a str) -> HashMap<&'a str, Vec<&'a T>> {
    let mut map: HashMap<&'a str, Vec<&'a T>> = HashMap::new();
    for r in records {
        map.entry(key(r)).or_default().push(r);
    }
    map
}

fn bucket_iter<'s, T>(map: &'s HashMap<&str, Vec<&'s T>>, key: &str) -> Candidates<'s, T> {
    let bucket: &'s [&'s T] = map.get(key).map(Vec::as_slice).unwrap_or_default();
    Candidates::Bucket(bucket.iter())
}

/// Registry view used by one join.
pub struct Lookup<'a, R: ?Sized> {
    registry: &'a R,
    index: Option<Index<'a>>,
}

impl<'a, R: Registry + ?Sized> Lookup<'a, R> {
    /// Prepare a lookup over `registry`; `Indexed` buckets the tables up front.
    pub fn new(registry: &'a R, strategy: JoinStrategy) -> Self {
        let index = match strategy {
            JoinStrategy::Scan => None,
            JoinStrategy::Indexed => Some(Index {
                components_by_model: bucket(registry.components(), |c| c.model.as_str()),
                channels_by_model: bucket(registry.channels(), |c| c.model.as_str()),
                gains_by_station: bucket(registry.gains(), |g| g.station.as_str()),
                calibrations_by_serial: bucket(registry.calibrations(), |c| c.serial.as_str()),
            }),
        };
        Self { registry, index }
    }

    /// Underlying registry.
    pub const fn registry(&self) -> &'a R {
        self.registry
    }

    /// Components that may belong to sensor `model`.
    pub fn components(&self, model: &str) -> Candidates<'_, Component> {
        match &self.index {
            Some(index) => bucket_iter(&index.components_by_model, model),
            None => Candidates::All(self.registry.components().iter()),
        }
    }

    /// Channels that may belong to datalogger `model`.
    pub fn channels(&self, model: &str) -> Candidates<'_, Channel> {
        match &self.index {
            Some(index) => bucket_iter(&index.channels_by_model, model),
            None => Candidates::All(self.registry.channels().iter()),
        }
    }

    /// Gains that may apply at `station`.
    pub fn gains(&self, station: &str) -> Candidates<'_, Gain> {
        match &self.index {
            Some(index) => bucket_iter(&index.gains_by_station, station),
            None => Candidates::All(self.registry.gains().iter()),
        }
    }

    /// Calibrations that may belong to the unit with `serial`.
    pub fn calibrations(&self, serial: &str) -> Candidates<'_, Calibration> {
        match &self.index {
            Some(index) => bucket_iter(&index.calibrations_by_serial, serial),
            None => Candidates::All(self.registry.calibrations().iter()),
        }
    }
}
