//! Geodätische Pfadlänge über die Haversine-Formel des `geo`-Crates.

use geo::{HaversineLength, LineString, Point};
use walkers::Position;

/// Berechnet die Großkreis-Länge eines Koordinatenzugs in Kilometern.
///
/// Weniger als zwei Koordinaten ergeben 0.0. Die eigentliche Formel
/// (Haversine über dem mittleren Erdradius) kommt vollständig aus `geo`.
pub fn path_length_km(coordinates: &[Position]) -> f64 {
    if coordinates.len() < 2 {
        return 0.0;
    }

    let line = LineString::from(
        coordinates
            .iter()
            .map(|p| Point::new(p.x(), p.y()))
            .collect::<Vec<Point<f64>>>(),
    );
    line.haversine_length() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pos(lon: f64, lat: f64) -> Position {
        walkers::lat_lon(lat, lon)
    }

    #[test]
    fn test_length_of_empty_and_single() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[pos(10.0, 10.0)]), 0.0);
    }

    #[test]
    fn test_one_degree_latitude_is_about_111_km() {
        let km = path_length_km(&[pos(0.0, 0.0), pos(0.0, 1.0)]);
        assert_relative_eq!(km, 111.2, epsilon = 0.1);
    }

    #[test]
    fn test_length_is_additive_over_segments() {
        let a = pos(0.0, 0.0);
        let b = pos(0.0, 1.0);
        let c = pos(0.0, 2.5);

        let total = path_length_km(&[a, b, c]);
        let partial = path_length_km(&[a, b]) + path_length_km(&[b, c]);
        assert_relative_eq!(total, partial, epsilon = 1e-9);
    }

    #[test]
    fn test_length_is_symmetric() {
        let forward = path_length_km(&[pos(13.4, 52.5), pos(16.4, 48.2)]);
        let backward = path_length_km(&[pos(16.4, 48.2), pos(13.4, 52.5)]);
        assert_relative_eq!(forward, backward, epsilon = 1e-9);
    }
}
