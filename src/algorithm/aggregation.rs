use crate::model::{
    city::{City, CityError, ClusterAssignment},
    grid::grid_ops,
    population::PopulationIndex,
};
use h3o::{CellIndex, LatLng};
use itertools::Itertools;
use std::collections::HashMap;

/// builds one [`City`] per cluster: total population summed over members
/// and an unweighted centroid averaging member cell centers, latitude and
/// longitude independently, in radians. member cells are spatially close by
/// construction, so the componentwise mean is an acceptable stand-in for a
/// geodesic centroid.
///
/// results are sorted by city id. a member absent from the population index
/// violates the phase contract (urban cells are drawn from the index) and
/// surfaces as a [`CityError`].
pub fn build_cities(
    assignment: &ClusterAssignment,
    population: &PopulationIndex,
) -> Result<Vec<City>, CityError> {
    let components: HashMap<CellIndex, Vec<CellIndex>> = assignment
        .iter()
        .map(|(cell, rep)| (*rep, *cell))
        .into_group_map();

    let mut cities = components
        .into_iter()
        .map(|(id, mut hexes)| {
            hexes.sort_unstable();
            let mut city_population: u64 = 0;
            let mut lat_sum = 0.0;
            let mut lng_sum = 0.0;
            for hex in hexes.iter() {
                let hex_population = population
                    .get(hex)
                    .copied()
                    .ok_or(CityError::MissingPopulation(*hex))?;
                city_population += hex_population;
                let center = grid_ops::cell_center(*hex);
                lat_sum += center.lat_radians();
                lng_sum += center.lng_radians();
            }
            let n_hexes = hexes.len() as f64;
            let centroid = LatLng::from_radians(lat_sum / n_hexes, lng_sum / n_hexes)?;
            Ok(City {
                id,
                hexes,
                population: city_population,
                centroid,
            })
        })
        .collect::<Result<Vec<City>, CityError>>()?;
    cities.sort_unstable_by_key(|city| city.id);

    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::city::UrbanSet;
    use h3o::{LatLng, Resolution};

    fn denver_cells(n: usize) -> Vec<CellIndex> {
        let origin = LatLng::new(39.7392, -104.9903)
            .expect("valid coordinate")
            .to_cell(Resolution::Eight);
        let mut cells: Vec<CellIndex> = origin.grid_disk(2);
        cells.sort_unstable();
        cells.truncate(n);
        cells
    }

    #[test]
    fn test_population_conservation() {
        let cells = denver_cells(3);
        let (a, b, c) = (cells[0], cells[1], cells[2]);
        let urban = UrbanSet::from_cells(vec![a, b, c]);
        let mut assignment = ClusterAssignment::with_singletons(&urban);
        assignment.assign(b, a);

        let population: PopulationIndex =
            HashMap::from([(a, 1500u64), (b, 500u64), (c, 7000u64)]);
        let cities = build_cities(&assignment, &population).expect("aggregate");

        assert_eq!(cities.len(), 2);
        // sorted by id: the two-hex city is rooted at the smallest cell
        assert_eq!(cities[0].id, a);
        assert_eq!(cities[0].population, 2000);
        assert_eq!(cities[0].hexes, vec![a, b]);
        assert_eq!(cities[1].id, c);
        assert_eq!(cities[1].population, 7000);
    }

    #[test]
    fn test_centroid_is_unweighted_mean_of_centers() {
        let cells = denver_cells(2);
        let (a, b) = (cells[0], cells[1]);
        let urban = UrbanSet::from_cells(vec![a, b]);
        let mut assignment = ClusterAssignment::with_singletons(&urban);
        assignment.assign(b, a);

        // population weighting must not affect the centroid
        let population: PopulationIndex = HashMap::from([(a, 1u64), (b, 1_000_000u64)]);
        let cities = build_cities(&assignment, &population).expect("aggregate");
        assert_eq!(cities.len(), 1);

        let center_a = grid_ops::cell_center(a);
        let center_b = grid_ops::cell_center(b);
        let expected_lat = (center_a.lat_radians() + center_b.lat_radians()) / 2.0;
        let expected_lng = (center_a.lng_radians() + center_b.lng_radians()) / 2.0;
        assert!((cities[0].centroid.lat_radians() - expected_lat).abs() < 1e-12);
        assert!((cities[0].centroid.lng_radians() - expected_lng).abs() < 1e-12);
    }

    #[test]
    fn test_singleton_centroid_is_cell_center() {
        let cells = denver_cells(1);
        let a = cells[0];
        let urban = UrbanSet::from_cells(vec![a]);
        let assignment = ClusterAssignment::with_singletons(&urban);

        let population: PopulationIndex = HashMap::from([(a, 42u64)]);
        let cities = build_cities(&assignment, &population).expect("aggregate");
        let center = grid_ops::cell_center(a);
        assert!((cities[0].centroid.lat_radians() - center.lat_radians()).abs() < 1e-12);
        assert!((cities[0].centroid.lng_radians() - center.lng_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_missing_population_is_an_error() {
        let cells = denver_cells(1);
        let urban = UrbanSet::from_cells(cells);
        let assignment = ClusterAssignment::with_singletons(&urban);

        let population: PopulationIndex = HashMap::new();
        let result = build_cities(&assignment, &population);
        assert!(matches!(result, Err(CityError::MissingPopulation(_))));
    }

    #[test]
    fn test_empty_assignment() {
        let assignment = ClusterAssignment::default();
        let population: PopulationIndex = HashMap::new();
        let cities = build_cities(&assignment, &population).expect("aggregate");
        assert!(cities.is_empty());
    }

    #[test]
    fn test_cities_sorted_by_id() {
        let cells = denver_cells(5);
        let urban = UrbanSet::from_cells(cells.clone());
        let assignment = ClusterAssignment::with_singletons(&urban);
        let population: PopulationIndex = cells.iter().map(|cell| (*cell, 10u64)).collect();

        let cities = build_cities(&assignment, &population).expect("aggregate");
        let ids: Vec<CellIndex> = cities.iter().map(|city| city.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
