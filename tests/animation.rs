//! End-to-end tests: configuration through to pixels
//!
//! These tests build settings the way the binaries do, drive an animation
//! and check what lands in the renderer.

use std::time::{Duration, Instant};

use eca_scroll::app::{Animation, CliArgs, Config, ConfigError, Preset, StartMode, SurfaceSize};
use eca_scroll::core::{Evolution, Generation, Rule};
use eca_scroll::raster::{rgb_to_pixel, Snapshot};

fn config_from_args(args: CliArgs) -> Result<Config, ConfigError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "speed = 30\n").unwrap();
    Config::load_with_args(&CliArgs {
        config: Some(path),
        ..args
    })
}

fn animation(config: &Config) -> Animation {
    let mut rng = config.rng();
    let settings = config.settings(&mut rng).unwrap();
    Animation::new(
        settings,
        config.surface,
        config.start,
        rng,
        config.colors.ink_rgb(),
    )
    .unwrap()
}

#[test]
fn test_preset_and_cli_build_expected_run() {
    let config = config_from_args(CliArgs {
        preset: Some("https://example.org/?rule=90&cellSize=8".to_string()),
        width: Some(64),
        height: Some(32),
        single_cell: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.rule, Some(90));
    assert_eq!(config.cell_size, 8);
    assert_eq!(config.speed, 30);

    let mut anim = animation(&config);
    assert_eq!(anim.renderer().columns(), 8);
    assert_eq!(anim.renderer().capacity(), 4);
    for _ in 0..3 {
        anim.tick().unwrap();
    }

    let snapshot = Snapshot::from_renderer(anim.renderer());
    assert_eq!(
        snapshot.rows,
        vec!["...#....", "..#.#...", ".#...#..", "#.#.#.#."]
    );
    assert_eq!(anim.preset().to_query(), "rule=90&cellSize=8&speed=30");
}

#[test]
fn test_written_config_reloads_to_same_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("eca.toml");
    let config = config_from_args(CliArgs {
        preset: Some("rule=110&cellSize=4&speed=12".to_string()),
        seed: Some(21),
        write_config: Some(path.clone()),
        ..Default::default()
    })
    .unwrap();
    config.save(&path).unwrap();

    let reloaded = Config::load_with_args(&CliArgs {
        config: Some(path),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(reloaded, config);
    assert_eq!(
        animation(&reloaded).renderer().surface(),
        animation(&config).renderer().surface()
    );
}

#[test]
fn test_invalid_preset_is_rejected() {
    let err = config_from_args(CliArgs {
        preset: Some("rule=90&speed=0".to_string()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::Preset { .. }));
}

#[test]
fn test_driver_matches_evolution() {
    let config = Config {
        rule: Some(30),
        seed: Some(11),
        surface: SurfaceSize::new(100, 50),
        cell_size: 5,
        ..Config::default()
    };
    let mut anim = animation(&config);
    let seed = anim.current().clone();
    let expected: Vec<Generation> = std::iter::once(seed.clone())
        .chain(Evolution::new(seed, Rule::RULE_30).take(24))
        .collect();

    for _ in 0..24 {
        anim.tick().unwrap();
    }
    // 10 rows fit; the last 10 generations remain
    let shown: Vec<Generation> = anim.renderer().history().iter().cloned().collect();
    assert_eq!(shown.as_slice(), &expected[15..]);
    assert_eq!(anim.generations(), 25);
}

#[test]
fn test_same_seed_same_picture() {
    let config = Config {
        seed: Some(5),
        surface: SurfaceSize::new(60, 30),
        cell_size: 3,
        start: StartMode::Random,
        ..Config::default()
    };
    let mut a = animation(&config);
    let mut b = animation(&config);
    for _ in 0..15 {
        a.tick().unwrap();
        b.tick().unwrap();
    }
    assert_eq!(a.settings(), b.settings());
    assert_eq!(a.renderer().surface(), b.renderer().surface());
}

#[test]
fn test_ticking_paints_with_configured_ink() {
    let config = Config {
        rule: Some(255),
        surface: SurfaceSize::new(20, 20),
        cell_size: 10,
        colors: eca_scroll::app::ColorScheme {
            ink: "#ff0000".to_string(),
            ..Default::default()
        },
        ..Config::default()
    };
    let mut anim = animation(&config);
    let start = Instant::now();
    anim.start(start);
    let interval = anim.settings().speed.interval();
    assert!(anim.poll(start + interval).unwrap());
    assert!(!anim.poll(start + interval + Duration::from_millis(1)).unwrap());

    // Rule 255 fills the second row completely
    let surface = anim.renderer().surface();
    assert_eq!(surface.pixel(1, 11), Some(rgb_to_pixel(255, 0, 0)));
    assert_eq!(surface.pixel(11, 18), Some(rgb_to_pixel(255, 0, 0)));
}

#[test]
fn test_preset_parse_respects_surface() {
    let small = SurfaceSize::new(30, 10);
    assert!(Preset::parse("cellSize=15", small).is_err());
    assert_eq!(
        Preset::parse("cellSize=10", small).unwrap().cell_size,
        Some(10)
    );
}
