use pointscan::cluster::{Clustering, Dbscan};
use pointscan::point::PointStore;
use proptest::prelude::*;

fn rows() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(
        prop_oneof![
            prop::collection::vec(-5.0f32..5.0, 2),
            prop::collection::vec(-5.0f32..5.0, 3),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_every_point_noise_xor_clustered(
        data in rows(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6,
        reclaim in any::<bool>(),
    ) {
        let mut store = PointStore::from_coords(&data).unwrap();
        Dbscan::new(eps, min_pts)
            .with_reclaim_noise(reclaim)
            .fit(&mut store)
            .unwrap();

        for p in &store {
            prop_assert!(p.is_visited());
            prop_assert!(p.is_noise() != p.cluster_id().is_some());
        }
    }

    #[test]
    fn prop_members_match_labels_and_are_disjoint(
        data in rows(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6,
        reclaim in any::<bool>(),
    ) {
        let mut store = PointStore::from_coords(&data).unwrap();
        let clusters = Dbscan::new(eps, min_pts)
            .with_reclaim_noise(reclaim)
            .fit(&mut store)
            .unwrap();

        let mut owner = vec![None; store.len()];
        for (expected_id, c) in clusters.iter().enumerate() {
            // Ids are sequential in discovery order.
            prop_assert_eq!(c.id(), expected_id);
            prop_assert!(!c.is_empty());
            for &idx in c.members() {
                prop_assert_eq!(store[idx].cluster_id(), Some(c.id()));
                prop_assert!(owner[idx].is_none());
                owner[idx] = Some(c.id());
            }
        }
        // Every clustered point is listed by its cluster.
        prop_assert_eq!(owner, store.labels());
    }

    #[test]
    fn prop_seeds_appear_in_store_order(
        data in rows(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6,
    ) {
        let mut store = PointStore::from_coords(&data).unwrap();
        let clusters = Dbscan::new(eps, min_pts).fit(&mut store).unwrap();
        let seeds: Vec<usize> = clusters.iter().map(|c| c.members()[0]).collect();
        prop_assert!(seeds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_region_query_is_reciprocal(
        data in rows(),
        eps in 0.0f32..3.0,
    ) {
        let store = PointStore::from_coords(&data).unwrap();
        let dbscan = Dbscan::new(eps, 1);
        let neighborhoods: Vec<Vec<usize>> =
            (0..store.len()).map(|i| dbscan.region_query(&store, i)).collect();

        for (a, hood) in neighborhoods.iter().enumerate() {
            prop_assert!(hood.contains(&a));
            prop_assert!(hood.windows(2).all(|w| w[0] < w[1]));
            for &b in hood {
                prop_assert!(neighborhoods[b].contains(&a));
            }
        }
    }

    #[test]
    fn prop_runs_are_deterministic(
        data in rows(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6,
    ) {
        let dbscan = Dbscan::new(eps, min_pts);

        let mut first = PointStore::from_coords(&data).unwrap();
        let a = dbscan.fit(&mut first).unwrap();

        // Re-running on the already-labelled store must not drift.
        let mut reused = first.clone();
        let b = dbscan.fit(&mut reused).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(first.noise_indices(), reused.noise_indices());
        prop_assert_eq!(first.labels(), reused.labels());
    }

    #[test]
    fn prop_min_pts_one_leaves_no_noise(
        data in rows(),
        eps in 0.0f32..3.0,
    ) {
        let labels = Dbscan::new(eps, 1).fit_predict(&data).unwrap();
        prop_assert!(labels.iter().all(|&l| l != pointscan::NOISE));
    }
}
