use std::collections::BTreeMap;

use game_content::{Content, default_data_dir};
use game_core::{ClassStats, ClassTable, EnemyTemplate, GameConfig, Level, ObstacleSet, Point};
use runtime::{EntityKind, FrameInput, RuntimeError, Session};

fn bundled_session(seed: u64) -> Session {
    Session::load(&default_data_dir(), seed).expect("bundled content should load")
}

/// Open floor, one stationary enemy just right of the player, guaranteed coins.
fn duel_content() -> Content {
    let mut classes = BTreeMap::new();
    classes.insert("warrior".to_string(), ClassStats::default());
    Content {
        config: GameConfig {
            coin_drop_chance: 1.0,
            enemy: EnemyTemplate {
                speed: 0.0,
                ..EnemyTemplate::default()
            },
            ..GameConfig::default()
        },
        classes: ClassTable::new(classes).unwrap(),
        level: Level::new(
            ObstacleSet::empty(),
            Point::new(100, 100),
            vec![Point::new(150, 100)],
        ),
    }
}

fn attack() -> FrameInput {
    FrameInput {
        attack_pressed: true,
        ..FrameInput::default()
    }
}

fn walk_right() -> FrameInput {
    FrameInput {
        right: true,
        ..FrameInput::default()
    }
}

#[test]
fn bundled_session_starts_as_warrior() {
    let session = bundled_session(1);
    let hud = session.hud();
    assert_eq!(hud.class, "warrior");
    assert_eq!(hud.health, hud.max_health);
    assert_eq!((hud.coins, hud.items), (0, 0));
    assert!(!hud.invulnerable);
    assert!(hud.flash_visible);

    let entities = session.entities();
    let players = entities.iter().filter(|e| e.kind == EntityKind::Player).count();
    let enemies = entities.iter().filter(|e| e.kind == EntityKind::Enemy).count();
    assert_eq!((players, enemies), (1, 2));
}

#[test]
fn class_hotkeys_follow_table_order() {
    let mut session = bundled_session(1);
    let before = session.scene().player().center();

    session
        .step(
            &FrameInput {
                class_slot: Some(0),
                ..FrameInput::default()
            },
            0.0,
        )
        .unwrap();
    assert_eq!(session.hud().class, "mage");
    assert_eq!(session.scene().player().center(), before);

    assert!(!session.select_class_slot(0).unwrap());
    assert!(session.select_class_slot(2).unwrap());
    assert_eq!(session.hud().class, "warrior");
}

#[test]
fn out_of_range_slot_is_rejected() {
    let mut session = bundled_session(1);
    let err = session
        .step(
            &FrameInput {
                class_slot: Some(9),
                ..FrameInput::default()
            },
            0.1,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::UnknownClassSlot {
            slot: 9,
            available: 3
        }
    ));
    assert_eq!(session.scene().ticks(), 0);
}

#[test]
fn duel_ends_with_a_collected_coin() {
    let mut session = Session::new(duel_content(), 3).unwrap();

    for _ in 0..3 {
        let report = session.step(&attack(), 0.5).unwrap();
        assert!(report.attack.is_some());
    }
    assert!(session.scene().enemies().is_empty());
    assert_eq!(session.scene().pickups().len(), 1);
    assert!(session.entities().iter().any(|e| e.kind == EntityKind::Coin));

    for _ in 0..6 {
        session.step(&walk_right(), 0.1).unwrap();
    }
    let hud = session.hud();
    assert_eq!((hud.coins, hud.items), (1, 0));
    assert!(session.scene().pickups().is_empty());
}

#[test]
fn hit_shape_is_listed_while_active() {
    let mut session = Session::new(duel_content(), 3).unwrap();
    session.step(&attack(), 0.5).unwrap();
    assert!(session.entities().iter().any(|e| e.kind == EntityKind::HitShape));

    session.step(&FrameInput::default(), 0.2).unwrap();
    assert!(!session.entities().iter().any(|e| e.kind == EntityKind::HitShape));
}

#[test]
fn hud_blinks_through_invulnerability_window() {
    let mut content = duel_content();
    content.level = Level::new(
        ObstacleSet::empty(),
        Point::new(100, 100),
        vec![Point::new(100, 100)],
    );
    let mut session = Session::new(content, 3).unwrap();

    let report = session.step(&FrameInput::default(), 0.0).unwrap();
    assert!(report.contact_hit.is_some());
    let hud = session.hud();
    assert_eq!(hud.health, hud.max_health - 10.0);
    assert!(hud.invulnerable);

    // Timer after each step: 0.35, 0.25, 0.15, 0.05.
    let mut blink = Vec::new();
    for dt in [0.05, 0.1, 0.1, 0.1] {
        session.step(&walk_right(), dt).unwrap();
        let json = serde_json::to_value(session.hud()).unwrap();
        assert_eq!(json["invulnerable"], true);
        blink.push(json["flash_visible"].as_bool().unwrap());
    }
    assert_eq!(blink, vec![false, true, false, true]);

    session.step(&walk_right(), 0.1).unwrap();
    let hud = session.hud();
    assert!(!hud.invulnerable);
    assert!(hud.flash_visible);
    assert_eq!(hud.health, hud.max_health - 10.0);
}

#[test]
fn same_seed_replays_identically() {
    let script: Vec<FrameInput> = (0..400)
        .map(|frame| FrameInput {
            up: frame % 7 < 2,
            down: frame % 11 < 3,
            left: frame % 13 < 4,
            right: frame % 5 < 3,
            attack_pressed: frame % 4 == 0,
            class_slot: None,
        })
        .collect();

    let run = |seed: u64| {
        let mut session = bundled_session(seed);
        for input in &script {
            session.step(input, 1.0 / 60.0).unwrap();
        }
        (session.hud(), session.entities())
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn hud_serializes_for_clients() {
    let session = bundled_session(1);
    let json = serde_json::to_value(session.hud()).unwrap();
    assert_eq!(json["class"], "warrior");
    assert_eq!(json["flash_visible"], true);

    let entities = serde_json::to_value(session.entities()).unwrap();
    assert!(
        entities
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["kind"] == "player")
    );
}

#[test]
fn missing_data_dir_is_a_content_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Session::load(dir.path(), 0).err().unwrap();
    assert!(matches!(err, RuntimeError::Content(_)));
}
