//! Collect the gains and calibrations that apply to a joined span.

use crate::lookup::Lookup;
use crate::registry::Registry;
use crate::types::{Calibration, Component, Equipment, Gain, Span, Spanned, Stream};

/// Keep the records that satisfy `matches` and overlap `span`, ordered by start.
///
/// - Key matching is exact: string comparisons are case-sensitive.
/// - Records sharing a start keep their input order (stable sort).
/// - Overlapping or duplicate records are all kept; resolving ambiguity is
///   left to the consumer.
pub fn collect_overlapping<'r, T, I, F>(records: I, span: &Span, mut matches: F) -> Vec<T>
where
    T: Spanned + Clone + 'r,
    I: IntoIterator<Item = &'r T>,
    F: FnMut(&T) -> bool,
{
    let mut out: Vec<T> = records
        .into_iter()
        .filter(|r| matches(r) && span.overlaps(r.span()))
        .cloned()
        .collect();
    out.sort_by_key(|r| r.span().start);
    out
}

impl<R: Registry + ?Sized> Lookup<'_, R> {
    /// Gains for the stream's site and the component's subsource.
    pub fn gains_for(&self, stream: &Stream, component: &Component, span: &Span) -> Vec<Gain> {
        collect_overlapping(self.gains(&stream.station), span, |g| {
            g.station == stream.station
                && g.location == stream.location
                && g.subsource == component.subsource
        })
    }

    /// Calibrations of `equipment` at component or channel `number`.
    pub fn calibrations_for(
        &self,
        equipment: &Equipment,
        number: i32,
        span: &Span,
    ) -> Vec<Calibration> {
        collect_overlapping(self.calibrations(&equipment.serial), span, |c| {
            c.applies_to(equipment, number)
        })
    }
}
