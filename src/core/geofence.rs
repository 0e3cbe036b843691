use crate::domain::model::ServiceRegion;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Returns the first region, in list order, whose radius contains the point.
///
/// Regions may overlap; an earlier region always wins over a closer one.
/// The boundary counts as inside. Coordinates are not range checked.
pub fn resolve(latitude: f64, longitude: f64, regions: &[ServiceRegion]) -> Option<&ServiceRegion> {
    regions.iter().find(|region| {
        let distance = haversine_km(
            region.center_latitude,
            region.center_longitude,
            latitude,
            longitude,
        );
        tracing::trace!(region = %region.name, distance_km = distance, "geofence check");
        distance <= region.radius_km
    })
}
