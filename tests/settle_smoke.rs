use playground_engine::{BodyCatalog, PlaygroundCore};

#[test]
fn full_catalog_settles_into_view() {
    let catalog = BodyCatalog::builtin();

    for seed in [7u32, 23, 2024] {
        let mut world = PlaygroundCore::new();
        world.set_seed(seed);
        world.initialize(1200.0, 600.0).expect("initialize");

        // Everything starts above the visible area (no ceiling).
        assert!(world.sample().poses.iter().all(|p| p.y < 0.0));

        world.start();
        for _ in 0..450 {
            world.step(16.0); // ~7 simulated seconds
        }

        let snapshot = world.sample();
        assert_eq!(snapshot.poses.len(), 26);

        let mut in_view = 0;
        for pose in &snapshot.poses {
            assert!(pose.x.is_finite() && pose.y.is_finite() && pose.angle.is_finite());
            assert!(
                (0.0..=1200.0).contains(&pose.x),
                "seed {}: {} escaped horizontally: {}",
                seed,
                pose.id,
                pose.x
            );

            // Whatever the rest orientation, a body's centre sits at least
            // its smallest half extent above the floor surface.
            let index = catalog.index_of(&pose.id).expect("catalog id");
            let d = catalog.get(index).expect("descriptor");
            let min_half = d.width.min(d.height) / 2.0;
            assert!(
                pose.y <= 600.0 - min_half + 2.0,
                "seed {}: {} buried in the floor at y={}",
                seed,
                pose.id,
                pose.y
            );

            assert!(pose.y > -150.0, "seed {}: {} never dropped in: {}", seed, pose.id, pose.y);
            if pose.y > 0.0 {
                in_view += 1;
            }
        }
        // The pile can poke above the top edge, but the bulk lands in view.
        assert!(
            in_view * 10 >= snapshot.poses.len() * 8,
            "seed {}: {}/26 in view",
            seed,
            in_view
        );

        // Most of the pile is at rest by now: poses barely move over one tick.
        world.step(16.0);
        let after = world.sample();
        let settled = snapshot
            .poses
            .iter()
            .zip(&after.poses)
            .filter(|(a, b)| (a.y - b.y).abs() < 1.0)
            .count();
        assert!(settled * 4 >= 26 * 3, "seed {}: only {}/26 settled", seed, settled);
    }
}
