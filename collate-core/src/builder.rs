//! The temporal join: cross-reference registry tables by key and overlapping
//! span to find every valid sensor, datalogger, stream, and channel
//! combination at a site.
//!
//! Two topologies are joined:
//! - Direct recorders, where sensor and datalogger are one deployed unit.
//! - Connections, which route an installed sensor to a separately deployed
//!   datalogger through a place and role.
//!
//! A record that fails a key match or span overlap is skipped, never
//! reported; malformed metadata simply produces fewer collections.

use crate::lookup::Lookup;
use crate::ordering::sort_collections;
use crate::registry::Registry;
use crate::types::{
    Channel, Collection, Component, Connection, DeployedDatalogger, Equipment, Install,
    JoinStrategy, Site, Spanned, Stream,
};

/// Build the ordered collections for `site` using the default join strategy.
///
/// Deterministic: the same registry contents and site always yield the same
/// sequence.
#[must_use]
pub fn build_collections<R: Registry + ?Sized>(registry: &R, site: &Site) -> Vec<Collection> {
    build_collections_with(registry, site, JoinStrategy::default())
}

/// Build the ordered collections for `site` with an explicit join strategy.
///
/// The strategy only affects how candidates are located; the result is
/// identical for every strategy.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "collate::core::build_collections",
        skip_all,
        fields(site = %site, strategy = ?strategy),
    )
)]
#[must_use]
pub fn build_collections_with<R: Registry + ?Sized>(
    registry: &R,
    site: &Site,
    strategy: JoinStrategy,
) -> Vec<Collection> {
    let lookup = Lookup::new(registry, strategy);

    let mut collections = recorder_collections(&lookup, site);
    #[cfg(feature = "tracing")]
    let direct = collections.len();

    collections.extend(connection_collections(&lookup, site));
    #[cfg(feature = "tracing")]
    tracing::debug!(
        direct,
        routed = collections.len() - direct,
        "joined collections"
    );

    sort_collections(&mut collections);
    collections
}

fn at_site(station: &str, location: &str, site: &Site) -> bool {
    station == site.station && location == site.location
}

#[allow(clippy::float_cmp)]
fn same_rate(channel: &Channel, stream: &Stream) -> bool {
    channel.sampling_rate == stream.sampling_rate
}

/// A connection may route a component to any channel numbered at or below
/// the component number plus the connection offset.
fn routes_to(component: &Component, connection: &Connection, channel: &Channel) -> bool {
    i64::from(component.number) + i64::from(connection.number) >= i64::from(channel.number)
}

fn streams_at<'r, R: Registry + ?Sized>(
    registry: &'r R,
    site: &'r Site,
) -> impl Iterator<Item = &'r Stream> + 'r {
    registry
        .streams()
        .iter()
        .filter(move |s| at_site(&s.station, &s.location, site))
}

fn components_of<'s, R: Registry + ?Sized>(
    lookup: &'s Lookup<'_, R>,
    sensor: &'s Equipment,
) -> impl Iterator<Item = &'s Component> + 's {
    lookup
        .components(&sensor.model)
        .filter(move |c| c.make == sensor.make && c.model == sensor.model)
}

fn channels_of<'s, R: Registry + ?Sized>(
    lookup: &'s Lookup<'_, R>,
    make: &'s str,
    model: &'s str,
) -> impl Iterator<Item = &'s Channel> + 's {
    lookup
        .channels(model)
        .filter(move |c| c.make == make && c.model == model)
}

/// Direct recorders: sensor and datalogger deployed together as a recorder.
fn recorder_collections<R: Registry + ?Sized>(
    lookup: &Lookup<'_, R>,
    site: &Site,
) -> Vec<Collection> {
    let registry = lookup.registry();
    let mut collections = Vec::new();

    for recorder in registry
        .installed_recorders()
        .iter()
        .filter(|r| at_site(&r.sensor.station, &r.sensor.location, site))
    {
        let sensor = &recorder.sensor;
        let equipment = sensor.equipment();

        // the bundled datalogger shares the sensor's make and serial
        let datalogger = DeployedDatalogger {
            install: Install {
                equipment: Equipment {
                    make: equipment.make.clone(),
                    model: recorder.datalogger_model.clone(),
                    serial: equipment.serial.clone(),
                },
                span: *recorder.span(),
            },
            ..DeployedDatalogger::default()
        };

        for stream in streams_at(registry, site) {
            let Some(span) = recorder.span().extent(&[stream.span]) else {
                continue;
            };

            for component in components_of(lookup, equipment) {
                let gains = lookup.gains_for(stream, component, &span);
                let sensor_calibrations =
                    lookup.calibrations_for(equipment, component.number, &span);

                for channel in channels_of(lookup, &equipment.make, &recorder.datalogger_model)
                    .filter(|c| same_rate(c, stream))
                {
                    let datalogger_calibrations =
                        lookup.calibrations_for(datalogger.equipment(), channel.number, &span);

                    collections.push(Collection {
                        span,
                        stream: stream.clone(),
                        channel: channel.clone(),
                        component: component.clone(),
                        installed_sensor: sensor.clone(),
                        deployed_datalogger: datalogger.clone(),
                        gains: gains.clone(),
                        sensor_calibrations: sensor_calibrations.clone(),
                        datalogger_calibrations,
                    });
                }
            }
        }
    }

    collections
}

/// Connection-routed sensors: installed sensor routed to a deployed datalogger by a connection.
fn connection_collections<R: Registry + ?Sized>(
    lookup: &Lookup<'_, R>,
    site: &Site,
) -> Vec<Collection> {
    let registry = lookup.registry();
    let mut collections = Vec::new();

    for connection in registry
        .connections()
        .iter()
        .filter(|c| at_site(&c.station, &c.location, site))
    {
        for sensor in registry
            .installed_sensors()
            .iter()
            .filter(|s| at_site(&s.station, &s.location, site))
        {
            for datalogger in registry
                .deployed_dataloggers()
                .iter()
                .filter(|d| d.place == connection.place && d.role == connection.role)
            {
                let Some(installed) = connection
                    .span
                    .extent(&[*sensor.span(), *datalogger.span()])
                else {
                    continue;
                };

                for stream in streams_at(registry, site) {
                    let Some(span) = installed.extent(&[stream.span]) else {
                        continue;
                    };

                    for component in components_of(lookup, sensor.equipment()) {
                        let gains = lookup.gains_for(stream, component, &span);
                        let sensor_calibrations =
                            lookup.calibrations_for(sensor.equipment(), component.number, &span);

                        let logger = datalogger.equipment();
                        for channel in channels_of(lookup, &logger.make, &logger.model).filter(|c| {
                            routes_to(component, connection, c) && same_rate(c, stream)
                        }) {
                            let datalogger_calibrations =
                                lookup.calibrations_for(logger, channel.number, &span);

                            collections.push(Collection {
                                span,
                                stream: stream.clone(),
                                channel: channel.clone(),
                                component: component.clone(),
                                installed_sensor: sensor.clone(),
                                deployed_datalogger: datalogger.clone(),
                                gains: gains.clone(),
                                sensor_calibrations: sensor_calibrations.clone(),
                                datalogger_calibrations,
                            });
                        }
                    }
                }
            }
        }
    }

    collections
}
