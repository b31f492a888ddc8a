pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance in kilometers between two `(latitude, longitude)`
/// pairs given in degrees.
pub fn haversine_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1_rad, lon1_rad) = (to_radians(from.0), to_radians(from.1));
    let (lat2_rad, lon2_rad) = (to_radians(to.0), to_radians(to.1));

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sum of the haversine distances between consecutive points of a polyline.
pub fn path_length(points: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for point in points {
        total += haversine_distance(previous, point);
        previous = point;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_itself_is_zero() {
        assert_eq!(haversine_distance((54.32, 10.13), (54.32, 10.13)), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let distance = haversine_distance((0.0, 0.0), (1.0, 0.0));
        assert!((distance - 111.19).abs() < 0.01, "got {distance}");
    }

    #[test]
    fn path_length_adds_up_segments() {
        let a = (0.0, 0.0);
        let b = (1.0, 0.0);
        let c = (2.0, 0.0);
        let expected = haversine_distance(a, b) + haversine_distance(b, c);
        assert!((path_length([a, b, c]) - expected).abs() < 1e-9);
    }

    #[test]
    fn short_paths_have_no_length() {
        assert_eq!(path_length(Vec::<(f64, f64)>::new()), 0.0);
        assert_eq!(path_length([(12.0, 34.0)]), 0.0);
    }
}
