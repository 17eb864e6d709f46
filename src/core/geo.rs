use crate::domain::model::{Coordinates, GeoFilter, Monument};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in meters (haversine).
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + (d_lon / 2.0).sin() * (d_lon / 2.0).sin() * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c * 1000.0
}

impl GeoFilter {
    /// Monuments without coordinates never match.
    pub fn matches(&self, monument: &Monument) -> bool {
        monument
            .coordinates
            .is_some_and(|coords| haversine_distance(self.center, coords) <= self.radius_meters)
    }
}

pub fn filter_by_distance(monuments: Vec<Monument>, geo: &GeoFilter) -> Vec<Monument> {
    monuments.into_iter().filter(|m| geo.matches(m)).collect()
}
