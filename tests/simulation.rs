use std::path::PathBuf;

use shoretile::{
    config::Config,
    render::{preview, render_cells, GridExport},
    snapshot::SimulationFile,
    TileVariant,
};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)
}

#[test]
fn loads_fixture_simulation() {
    let simulation = SimulationFile::load(fixture("assets/test.sim.json")).expect("fixture parses");
    assert_eq!(simulation.map().width, 8);
    assert_eq!(simulation.map().height, 6);
    assert_eq!(simulation.tick_count(), 3);
    assert_eq!(simulation.state_at(1).units.len(), 2);
    assert!(simulation.state_at(42).paused);
}

#[test]
fn resolves_fixture_lagoon() {
    let config = Config::from_yaml(fixture("config/default.yaml")).expect("config parses");
    assert_eq!(config.name, "lagoon");
    let (transformer, layout) = config.build_transformer().expect("config is consistent");
    let simulation = SimulationFile::load(fixture("assets/test.sim.json")).unwrap();

    let (grid, report) = transformer.transform_with_report(simulation.map()).unwrap();
    assert_eq!(report.water_cells, 17);
    assert_eq!(report.reclassified, 17);

    let expected = [
        (2, 1, TileVariant::WaterLandTopLeftEdges),
        (4, 1, TileVariant::WaterLandTopRightEdges),
        (3, 2, TileVariant::WaterLandBottom),
        (2, 3, TileVariant::WaterLandBottomLeft),
        (6, 3, TileVariant::WaterLandBottomRightEdges),
        (3, 4, TileVariant::WaterLandTop),
        (6, 4, TileVariant::Rock),
    ];
    for (x, y, variant) in expected {
        assert_eq!(grid.variant_at(x, y), Some(variant), "cell ({x}, {y})");
    }

    assert_eq!(
        preview(&grid),
        "########\n##+-+###\n#+-__-+#\n#+/..\\+#\n##+--+^#\n########\n"
    );

    let cell = render_cells(&grid, &layout)
        .find(|cell| (cell.x, cell.y) == (4, 1))
        .unwrap();
    // (4, 0) with 16px cells and a 1px gap
    assert_eq!((cell.source.x, cell.source.y), (68, 0));
}

#[test]
fn export_writes_every_cell() {
    let config = Config::standard();
    let (transformer, layout) = config.build_transformer().unwrap();
    let simulation = SimulationFile::load(fixture("assets/test.sim.json")).unwrap();
    let grid = transformer.transform(simulation.map()).unwrap();

    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("grid.json");
    let export = GridExport::new(&grid, &layout, transformer.policy_name());
    std::fs::write(&path, serde_json::to_string_pretty(&export).unwrap()).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(value["width"], 8);
    assert_eq!(value["scheme"], "compound");
    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 48);
    assert_eq!(cells[10]["variant"], "water_land_top_left_edges");
    assert_eq!(cells[10]["atlas"]["column"], 2);
}

#[test]
fn missing_simulation_reports_path() {
    let err = SimulationFile::load(fixture("assets/missing.sim.json")).unwrap_err();
    assert!(err.to_string().contains("missing.sim.json"));
}
