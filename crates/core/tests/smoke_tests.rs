use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tilegen_core::content::{keys, road_tileset, terrace_tileset};
use tilegen_core::{
    ConfigError, GenerationOutcome, Generator, GeneratorConfig, Pos, TilesetFile,
    find_layout_violation, generate_layout,
};

#[test]
fn road_layout_fills_every_interior_cell() {
    let tiles = road_tileset();
    let report = generate_layout(2024, 20, 12, &tiles).expect("valid input");

    assert_eq!(report.outcome, GenerationOutcome::Succeeded);
    assert_eq!(report.placements.len(), 18 * 10);
    for y in 1..11 {
        for x in 1..19 {
            assert!(report.placement_at(Pos::new(x, y)).is_some(), "missing ({x}, {y})");
        }
    }
    assert!(report.placement_at(Pos::new(0, 0)).is_none());
    assert_eq!(find_layout_violation(&tiles, &report), None);
}

#[test]
fn terrace_sweep_either_succeeds_consistently_or_fails_cleanly() {
    let tiles = terrace_tileset();
    let mut successes = 0;
    let mut repaired = 0;
    for seed in 0..24 {
        let report = generate_layout(seed, 10, 7, &tiles).expect("valid input");
        match report.outcome {
            GenerationOutcome::Succeeded => {
                successes += 1;
                if report.stats.backtracks > 0 {
                    repaired += 1;
                }
                assert_eq!(report.placements.len(), 8 * 5);
                assert_eq!(find_layout_violation(&tiles, &report), None, "seed {seed}");
                let known = [keys::TERRACE_SLOPE, keys::TERRACE_LEDGE, keys::TERRACE_STEP];
                assert!(
                    report
                        .placements
                        .iter()
                        .all(|placement| known.contains(&placement.tile_id.as_str()))
                );
            }
            GenerationOutcome::Failed => assert!(report.placements.is_empty()),
        }
    }
    assert!(successes > 0, "no terrace layout succeeded across 24 seeds");
    assert!(repaired > 0, "no successful terrace layout needed a contradiction repair");
}

#[test]
fn invalid_requests_are_rejected_up_front() {
    let tiles = road_tileset();
    assert_eq!(generate_layout(1, 5, 5, &[]), Err(ConfigError::EmptyTileSet));
    assert_eq!(
        generate_layout(1, 0, 5, &tiles),
        Err(ConfigError::GridTooSmall { width: 0, height: 5 })
    );
}

#[test]
fn placement_json_is_stable_for_the_visualizer() {
    let report = generate_layout(8, 4, 4, &road_tileset()).expect("valid input");
    let json = serde_json::to_value(&report.placements).expect("serialize");
    let placements = json.as_array().expect("array");

    assert_eq!(placements.len(), 4);
    for placement in placements {
        let rotation = placement["rotation"].as_u64().expect("rotation degrees");
        assert!([0, 90, 180, 270].contains(&rotation));
        assert!(placement["tile_id"].is_string());
        assert!(placement["position"]["x"].is_u64());
    }
}

#[test]
fn tileset_document_generator_section_bounds_the_search() {
    let json = r#"{
        "format_version": 1,
        "generator": { "max_attempts": 2, "max_collapse_steps": 1 },
        "tiles": [
            { "id": "sand", "weight": 3, "edges": { "left": [5], "right": [5], "forward": [5], "back": [5] } },
            { "id": "dune", "weight": 1, "edges": { "left": [5], "right": [5], "forward": [5], "back": [5] } }
        ]
    }"#;
    let file = TilesetFile::from_json_str(json).expect("parse");

    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let bounded = Generator::new(file.generator)
        .generate(6, 6, &file.tiles, &mut rng)
        .expect("valid input");
    assert_eq!(bounded.outcome, GenerationOutcome::Failed);
    assert_eq!(bounded.stats.attempts, 2);
    assert_eq!(bounded.stats.failed_attempts, 2);

    let relaxed = GeneratorConfig { max_collapse_steps: None, ..file.generator };
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let report =
        Generator::new(relaxed).generate(6, 6, &file.tiles, &mut rng).expect("valid input");
    assert!(report.is_success());
    assert_eq!(report.placements.len(), 16);
}
