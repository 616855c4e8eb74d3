use geo::Point;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees
/// (`x` is the longitude, `y` the latitude).
pub fn haversine_distance(a: Point, b: Point) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of a polyline in kilometers.
pub fn path_length<'a, It>(points: It) -> f64
where
    It: IntoIterator<Item = &'a Point>,
{
    let mut it = points.into_iter();
    let Some(mut prev) = it.next() else {
        return 0.0;
    };
    let mut result = 0.0;
    for p in it {
        result += haversine_distance(*prev, *p);
        prev = p;
    }
    result
}
