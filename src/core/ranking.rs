use crate::models::{GeoPoint, RankedSchool, School};

/// Attach the distance from `origin` to every school and order them nearest first.
///
/// The sort is stable, so schools at the same distance keep the order in
/// which storage returned them.
pub fn rank_by_distance(schools: Vec<School>, origin: &GeoPoint) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance = origin.distance_to(&school.location());
            RankedSchool { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: i64, lat: f64, lon: f64) -> School {
        School {
            id,
            name: format!("School {}", id),
            address: format!("{} Main St", id),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_sorted_nearest_first() {
        let origin = GeoPoint::new(40.7128, -74.0060); // New York
        let schools = vec![
            school(1, 34.0522, -118.2437), // Los Angeles
            school(2, 40.7306, -73.9352),  // Brooklyn
            school(3, 41.8781, -87.6298),  // Chicago
        ];

        let ranked = rank_by_distance(schools, &origin);

        let ids: Vec<i64> = ranked.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let origin = GeoPoint::new(0.0, 0.0);
        let schools = vec![
            school(7, 1.0, 0.0),
            school(3, 0.0, 1.0),
            school(5, -1.0, 0.0),
        ];

        let ranked = rank_by_distance(schools, &origin);

        let ids: Vec<i64> = ranked.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_by_distance(Vec::new(), &GeoPoint::new(0.0, 0.0)).is_empty());
    }
}
