#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::builder::{LevelBuilder, LevelInvalidReason};
    use crate::color::{Color, ColorError, MATCH_TOLERANCE};
    use crate::error::ConfigError;
    use crate::grid::{GridSpec, Point, MAX_GRID_SIZE};
    use crate::intersection::{has_self_intersection, path_intersects_any, segments_intersect, step_would_cross, Segment};
    use crate::level::Level;
    use crate::location::Location;
    use crate::mixing::{average_hue, mix};
    use crate::path::{DrawnPath, Path};
    use crate::progress::{MemoryStore, Progress};
    use crate::session::{DiscardReason, DrawState, PathOutcome, PuzzleSession};
    use crate::catalog::LevelCatalog;
    use crate::validator::{IllegalMove, MoveValidator};

    fn locations(cells: &[(usize, usize)]) -> Vec<Location> {
        cells.iter().map(|(x, y)| Location(*x, *y)).collect_vec()
    }

    fn path(color: Color, cells: &[(usize, usize)]) -> Path {
        Path::from_points(color, locations(cells)).unwrap()
    }

    fn drawn(color: Color, cells: &[(usize, usize)]) -> DrawnPath {
        let points = locations(cells);
        let mut path = DrawnPath::new(points[0], color);
        points[1..].iter().for_each(|location| path.push(*location));
        path
    }

    fn center(session: &PuzzleSession, x: usize, y: usize) -> Point {
        session.grid().center_of(Location(x, y)).unwrap()
    }

    fn draw(session: &mut PuzzleSession, cells: &[(usize, usize)]) -> PathOutcome {
        let start = center(session, cells[0].0, cells[0].1);
        session.begin_path(start);
        for (x, y) in &cells[1..] {
            let next = center(session, *x, *y);
            session.extend_path(next);
        }
        session.end_path()
    }

    fn hue_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).abs() % 1.0;
        d.min(1.0 - d)
    }

    fn single_route_level() -> Level {
        LevelBuilder::with_size(1, NonZero::new(5).unwrap())
            .add_source(Location(0, 0), Color::RED)
            .add_receiver(Location(4, 4), Color::RED)
            .build()
            .unwrap()
    }

    fn purple_mixing_level() -> Level {
        LevelBuilder::with_size(2, NonZero::new(5).unwrap())
            .add_source(Location(0, 0), Color::RED)
            .add_source(Location(4, 0), Color::BLUE)
            .add_mixer(Location(2, 2))
            .add_receiver(Location(2, 4), Color::from_rgb8(0x80, 0x00, 0x80))
            .build()
            .unwrap()
    }

    const RED_FEED: [(usize, usize); 5] = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)];
    const BLUE_FEED: [(usize, usize); 5] = [(4, 0), (4, 1), (4, 2), (3, 2), (2, 2)];

    #[test]
    fn centers_round_trip() {
        for (grid_size, board_size) in [(1, 100.0), (3, 333.3), (5, 500.0), (6, 1080.0), (7, 99.9)] {
            let grid = GridSpec::new(grid_size, board_size).unwrap();
            let centers = grid.centers().collect_vec();

            assert_eq!(centers.len(), grid_size * grid_size);
            assert!(centers.iter().tuple_combinations().all(|(a, b)| a.1 != b.1));

            for (location, center) in centers {
                assert_eq!(grid.center_of(location), Some(center));
                assert_eq!(grid.nearest_center(center), center);
                assert_eq!(grid.nearest_cell(center), location);
                assert_eq!(grid.cell_of(center), Some(location));
            }
        }
    }

    #[test]
    fn centers_are_stable() {
        let a = GridSpec::new(6, 777.7).unwrap();
        let b = GridSpec::new(6, 777.7).unwrap();
        assert!(a.centers().zip(b.centers()).all(|(x, y)| x == y));
    }

    #[test]
    fn snap_to_nearest() {
        let grid = GridSpec::new(5, 500.0).unwrap();
        assert_eq!(grid.cell_size(), 100.0);
        assert_eq!(grid.nearest_cell(Point::new(130.0, 270.0)), Location(1, 2));
        assert_eq!(grid.nearest_center(Point::new(130.0, 270.0)), Point::new(150.0, 250.0));
        // far off the board still snaps to the closest edge cell
        assert_eq!(grid.nearest_cell(Point::new(-1000.0, 9000.0)), Location(0, 4));
        assert_eq!(grid.cell_of(Point::new(151.0, 250.0)), None);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let grid = GridSpec::new(4, 400.0).unwrap();
        let centers = grid.centers().collect_vec();

        for ((la, a), (lb, b)) in centers.iter().cartesian_product(centers.iter()) {
            let forward = grid.is_orthogonal_adjacent_move(*a, *b);
            assert_eq!(forward, grid.is_orthogonal_adjacent_move(*b, *a));

            let manhattan = la.0.abs_diff(lb.0) + la.1.abs_diff(lb.1);
            assert_eq!(forward, manhattan == 1, "{la:?} -> {lb:?}");
        }

        assert!(!grid.is_orthogonal_adjacent_move(Point::new(0.0, 0.0), Point::new(50.0, 150.0)));
    }

    #[test]
    fn bad_grids_fail_fast() {
        assert!(matches!(GridSpec::new(0, 100.0), Err(ConfigError::ZeroGridSize)));
        assert!(matches!(GridSpec::new(MAX_GRID_SIZE + 1, 100.0), Err(ConfigError::GridTooLarge(_))));
        assert!(GridSpec::new(MAX_GRID_SIZE, 100.0).is_ok());
        for board_size in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(GridSpec::new(5, board_size), Err(ConfigError::NonPositiveBoardSize(_))));
        }
    }

    #[test]
    fn resize_board() {
        let mut grid = GridSpec::new(5, 500.0).unwrap();
        let before = grid.centers().collect_vec();

        grid.set_board_size(500.0).unwrap();
        assert_eq!(grid.centers().collect_vec(), before);

        grid.set_board_size(250.0).unwrap();
        assert_eq!(grid.center_of(Location(0, 0)), Some(Point::new(25.0, 25.0)));
        assert_eq!(grid.center_of(Location(4, 2)), Some(Point::new(225.0, 125.0)));

        assert!(grid.set_board_size(-1.0).is_err());
        assert_eq!(grid.board_size(), 250.0);
    }

    #[test]
    fn mix_trivial_inputs() {
        assert!(mix(&[]).is_transparent());

        let odd = Color::rgb(0.3, 0.7, 0.1);
        assert_eq!(mix(&[odd]), odd);
    }

    #[test]
    fn mix_pigment_pairs() {
        assert_eq!(mix(&[Color::RED, Color::BLUE]).to_rgb8(), (0x80, 0x00, 0x80));
        assert_eq!(mix(&[Color::BLUE, Color::RED]).to_rgb8(), (0x80, 0x00, 0x80));
        assert_eq!(mix(&[Color::BLUE, Color::YELLOW]).to_rgb8(), (0x00, 0xFF, 0x00));
        assert_eq!(mix(&[Color::YELLOW, Color::BLUE]).to_rgb8(), (0x00, 0xFF, 0x00));
        assert_eq!(mix(&[Color::RED, Color::YELLOW]).to_rgb8(), (0xFF, 0x8C, 0x00));

        // anything past the thresholds counts as the pigment
        let brick = Color::rgb(0.7, 0.3, 0.3);
        let navy = Color::rgb(0.2, 0.1, 0.9);
        assert_eq!(mix(&[brick, navy]), Color::PURPLE);
    }

    #[test]
    fn mix_wraps_hue() {
        let a = Color::from_hsl(crate::color::Hsl { h: 0.98, s: 1.0, l: 0.5 });
        let b = Color::from_hsl(crate::color::Hsl { h: 0.02, s: 1.0, l: 0.5 });

        let mixed = mix(&[a, b]);
        assert!(hue_distance(mixed.to_hsl().h, 0.0) < 0.01, "{mixed:?}");
        assert!(mixed.matches(&Color::RED, 0.01));

        let hue = average_hue([0.98, 0.02].into_iter());
        assert!(hue_distance(hue, 0.0) < 1e-4);
        assert!((0.0..1.0).contains(&hue));
    }

    #[test]
    fn mix_general_rule() {
        let yellow = mix(&[Color::RED, Color::GREEN]);
        assert!(yellow.matches(&Color::YELLOW, 0.02), "{yellow:?}");

        // no saturation anywhere gives a gray of the mean lightness
        assert_eq!(mix(&[Color::rgb(1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 0.0)]), Color::rgb(0.5, 0.5, 0.5));

        // three inputs never take the pigment shortcut
        let reddish = mix(&[Color::RED, Color::BLUE, Color::RED]);
        assert!(hue_distance(reddish.to_hsl().h, 11.0 / 12.0) < 0.01, "{reddish:?}");

        let a = Color::rgb(0.2, 0.5, 0.9);
        let b = Color::rgb(0.9, 0.5, 0.2);
        assert!(mix(&[a, b]).matches(&mix(&[b, a]), 1e-5));

        for colors in [vec![a, b], vec![Color::GREEN, b, a], vec![Color::rgb(1.0, 0.0, 0.5), Color::rgb(0.0, 1.0, 1.0)]] {
            let mixed = mix(&colors);
            assert!([mixed.r, mixed.g, mixed.b].iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn colors_match_per_channel() {
        assert!(Color::rgb(0.85, 0.15, 0.15).matches(&Color::RED, MATCH_TOLERANCE));
        assert!(!Color::rgb(0.75, 0.0, 0.0).matches(&Color::RED, MATCH_TOLERANCE));
        assert!(!Color::rgb(1.0, 0.0, 0.3).matches(&Color::RED, MATCH_TOLERANCE));
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!("#800080".parse::<Color>().unwrap().to_rgb8(), (128, 0, 128));
        assert_eq!("#FF000080".parse::<Color>().unwrap().a, 128.0 / 255.0);
        assert_eq!("800080".parse::<Color>(), Err(ColorError::MissingHash));
        assert_eq!("#12345".parse::<Color>(), Err(ColorError::InvalidLength(5)));
        assert_eq!("#GG0000".parse::<Color>(), Err(ColorError::InvalidHex('G')));
        assert_eq!(Color::ORANGE.to_string(), "#FF8C00");
    }

    #[test]
    fn segment_crossings() {
        let horizontal = Segment::new(Location(1, 2), Location(3, 2));
        let vertical = Segment::new(Location(2, 1), Location(2, 3));
        let parallel = Segment::new(Location(1, 3), Location(3, 3));
        let touching = Segment::new(Location(3, 2), Location(3, 4));
        let apart = Segment::new(Location(4, 0), Location(4, 4));

        assert!(segments_intersect(&horizontal, &vertical));
        assert!(segments_intersect(&vertical, &horizontal));
        assert!(!segments_intersect(&horizontal, &parallel));
        assert!(segments_intersect(&horizontal, &touching));
        assert!(!segments_intersect(&horizontal, &apart));
    }

    #[test]
    fn crossing_track_is_flagged() {
        let committed = [path(Color::BLUE, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)])];
        let candidate = locations(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);

        assert!(path_intersects_any(&candidate, &committed));
    }

    #[test]
    fn shared_mixer_is_not_a_crossing() {
        let committed = [path(Color::RED, &RED_FEED)];
        let candidate = locations(&[(4, 0), (3, 0), (2, 0), (2, 1), (2, 2)]);

        assert!(!path_intersects_any(&candidate, &committed));
        assert!(!path_intersects_any(&locations(&BLUE_FEED), &committed));
    }

    #[test]
    fn self_crossing() {
        let staircase = locations(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (4, 3), (4, 4)]);
        assert!(!has_self_intersection(&staircase));

        let looped = locations(&[(0, 1), (1, 1), (2, 1), (2, 2), (1, 2), (1, 1), (1, 0)]);
        assert!(has_self_intersection(&looped));

        assert!(!has_self_intersection(&locations(&[(0, 0), (1, 0)])));

        // the only crossing involves the segment leaving the start
        let from_start = locations(&[(0, 1), (2, 1), (2, 2), (1, 2), (1, 0), (3, 0)]);
        assert!(!has_self_intersection(&from_start));

        // same crossing with a stub at each end, so neither crossing segment is anchored
        let interior = locations(&[(0, 0), (0, 1), (2, 1), (2, 2), (1, 2), (1, 0), (3, 0), (3, 1)]);
        assert!(has_self_intersection(&interior));
    }

    #[test]
    fn step_crossing_hint() {
        let committed = [path(Color::BLUE, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)])];

        assert!(step_would_cross(Location(1, 2), Location(2, 2), &committed, &[], false, false));
        assert!(!step_would_cross(Location(1, 2), Location(2, 2), &committed, &[], false, true));
        assert!(!step_would_cross(Location(0, 0), Location(1, 0), &committed, &[], false, false));

        let in_progress = locations(&[(1, 0), (1, 1), (1, 2), (2, 2), (2, 1)]);
        assert!(step_would_cross(Location(2, 1), Location(0, 1), &[], &in_progress, false, false));
        // the segment just drawn is not compared against its own continuation
        assert!(!step_would_cross(Location(2, 1), Location(3, 1), &[], &in_progress, false, false));
    }

    #[test]
    fn validator_rules() {
        let level = purple_mixing_level();
        let grid = GridSpec::new(5, 500.0).unwrap();
        let validator = MoveValidator::new(&grid, &level);
        let committed = [path(Color::RED, &RED_FEED)];

        // onto the middle of a committed path
        let blue = drawn(Color::BLUE, &[(4, 0), (3, 0), (2, 0), (1, 0), (1, 1)]);
        assert_eq!(validator.check(Location(1, 1), Location(0, 1), &committed, Some(&blue)), Err(IllegalMove::Occupied(Location(0, 1))));

        // onto a mixer another path already feeds
        let blue = drawn(Color::BLUE, &BLUE_FEED[..4]);
        assert!(validator.is_valid_move(Location(3, 2), Location(2, 2), &committed, Some(&blue)));

        // back onto itself
        let blue = drawn(Color::BLUE, &[(4, 0), (4, 1), (3, 1), (3, 2), (4, 2)]);
        assert_eq!(validator.check(Location(4, 2), Location(4, 1), &committed, Some(&blue)), Err(IllegalMove::Loop(Location(4, 1))));

        // through the other source
        let blue = drawn(Color::BLUE, &[(4, 0), (3, 0), (2, 0), (1, 0)]);
        assert_eq!(validator.check(Location(1, 0), Location(0, 0), &[], Some(&blue)), Err(IllegalMove::ThroughSource(Location(0, 0))));

        for (from, to) in [((3, 1), (2, 2)), ((4, 0), (2, 0)), ((1, 1), (1, 1))] {
            let (from, to) = (Location(from.0, from.1), Location(to.0, to.1));
            assert_eq!(validator.check(from, to, &[], None), Err(IllegalMove::NotAdjacent { from, to }));
        }
    }

    #[test]
    fn single_route_completes() {
        let mut session = PuzzleSession::new(single_route_level(), 500.0).unwrap();
        let outcome = draw(&mut session, &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (4, 3), (4, 4)]);

        assert_eq!(outcome, PathOutcome::Committed { level_completed: true });
        assert!(session.is_receiver_satisfied(Location(4, 4)));
        assert!(session.is_level_complete());
        assert_eq!(session.state(), DrawState::Idle);
        assert!(session.in_progress_path().is_none());
    }

    #[test]
    fn mixer_feeds_receiver() {
        let mut session = PuzzleSession::new(purple_mixing_level(), 500.0).unwrap();

        assert_eq!(draw(&mut session, &RED_FEED), PathOutcome::Committed { level_completed: false });
        assert_eq!(draw(&mut session, &BLUE_FEED), PathOutcome::Committed { level_completed: false });
        assert_eq!(session.mixer_output(Location(2, 2)), Some(Color::PURPLE));
        assert_eq!(session.mixer_inputs(Location(2, 2)).len(), 2);

        assert_eq!(draw(&mut session, &[(2, 2), (2, 3), (2, 4)]), PathOutcome::Committed { level_completed: true });
        assert!(session.is_receiver_satisfied(Location(2, 4)));
        assert_eq!(session.committed_paths()[2].color(), Color::PURPLE);

        let feeders = session.committed_paths()[..2].to_vec();
        let removed = session.undo().unwrap();
        assert_eq!(removed.last(), Location(2, 4));
        assert!(!session.is_receiver_satisfied(Location(2, 4)));
        assert!(!session.is_level_complete());
        assert_eq!(session.committed_paths(), &feeders[..]);
    }

    #[test]
    fn drawing_skips_illegal_steps() {
        let mut session = PuzzleSession::new(purple_mixing_level(), 500.0).unwrap();
        draw(&mut session, &RED_FEED);

        assert!(session.begin_path(center(&session, 4, 0)));
        for (x, y) in [(3, 0), (2, 0), (1, 0), (1, 1)] {
            assert!(session.extend_path(center(&session, x, y)));
        }

        let before = session.in_progress_path().cloned();
        // occupied, diagonal, loop, and the same cell again
        assert!(!session.extend_path(center(&session, 0, 1)));
        assert!(!session.extend_path(center(&session, 2, 2)));
        assert!(!session.extend_path(center(&session, 1, 0)));
        assert!(!session.extend_path(Point::new(160.0, 140.0)));
        assert_eq!(session.in_progress_path().cloned(), before);
        assert_eq!(session.drag_position(), Some(Point::new(160.0, 140.0)));

        assert_eq!(session.end_path(), PathOutcome::Discarded(DiscardReason::DanglingEnd));
        assert_eq!(session.committed_paths().len(), 1);
        assert_eq!(session.drag_position(), None);
    }

    #[test]
    fn path_starts() {
        let mut session = PuzzleSession::new(purple_mixing_level(), 500.0).unwrap();

        // empty cell, and a mixer nothing feeds yet
        assert!(!session.begin_path(center(&session, 3, 3)));
        assert!(!session.begin_path(center(&session, 2, 2)));
        assert_eq!(session.state(), DrawState::Idle);
        assert_eq!(session.end_path(), PathOutcome::NotDrawing);

        assert!(session.begin_path(center(&session, 0, 0)));
        assert!(!session.begin_path(center(&session, 4, 0)));
        assert_eq!(session.in_progress_path().unwrap().color(), Color::RED);
        assert_eq!(session.end_path(), PathOutcome::Discarded(DiscardReason::TooShort));
    }

    #[test]
    fn crossing_through_mixer_is_discarded() {
        let level = LevelBuilder::with_size(3, NonZero::new(5).unwrap())
            .add_source(Location(0, 2), Color::RED)
            .add_source(Location(2, 0), Color::BLUE)
            .add_mixer(Location(2, 2))
            .add_receiver(Location(4, 2), Color::RED)
            .add_receiver(Location(2, 4), Color::BLUE)
            .build()
            .unwrap();
        let mut session = PuzzleSession::new(level, 500.0).unwrap();

        assert_eq!(draw(&mut session, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]), PathOutcome::Committed { level_completed: false });
        assert_eq!(draw(&mut session, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]), PathOutcome::Discarded(DiscardReason::Crossing));
        assert_eq!(session.committed_paths().len(), 1);
        assert!(!session.would_step_cross(Location(2, 1), Location(2, 2)));
        assert!(session.would_step_cross(Location(1, 1), Location(1, 2)));
    }

    #[test]
    fn clear_and_reset() {
        let staircase = [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (4, 3), (4, 4)];
        let mut session = PuzzleSession::new(single_route_level(), 500.0).unwrap();
        draw(&mut session, &staircase);
        assert!(session.is_level_complete());

        session.clear();
        assert!(!session.is_level_complete());
        assert!(session.committed_paths().is_empty());
        assert!(session.receiver_satisfaction().all(|(_, satisfied)| !satisfied));

        // completing again is a fresh transition
        assert_eq!(draw(&mut session, &staircase), PathOutcome::Committed { level_completed: true });

        session.begin_path(center(&session, 0, 0));
        session.reset();
        assert_eq!(session.state(), DrawState::Idle);
        assert!(session.committed_paths().is_empty());
        assert!(!session.is_level_complete());
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn resize_keeps_paths() {
        let mut session = PuzzleSession::new(single_route_level(), 500.0).unwrap();
        assert!(session.begin_path(Point::new(40.0, 60.0)));
        assert!(session.extend_path(Point::new(150.0, 50.0)));

        session.set_board_size(250.0).unwrap();
        assert!(session.extend_path(Point::new(75.0, 75.0)));
        assert_eq!(session.in_progress_path().unwrap().points(), &locations(&[(0, 0), (1, 0), (1, 1)])[..]);
        assert_eq!(center(&session, 1, 1), Point::new(75.0, 75.0));
    }

    #[test]
    fn builder_validation() {
        let mut builder = LevelBuilder::with_size(1, NonZero::new(5).unwrap());
        builder.add_source(Location(0, 0), Color::RED)
            .add_receiver(Location(5, 0), Color::RED)
            .add_receiver(Location(4, 4), Color::RED);
        assert_eq!(builder.build(), Err(&vec![LevelInvalidReason::FeatureOutOfBounds(Location(5, 0))]));

        let mut builder = LevelBuilder::with_size(1, NonZero::new(5).unwrap());
        builder.add_source(Location(0, 0), Color::RED)
            .add_mixer(Location(0, 0));
        assert_eq!(builder.is_valid(), Some(&vec![LevelInvalidReason::FeatureOverlap(Location(0, 0))]));

        let level = LevelBuilder::with_size(1, NonZero::new(5).unwrap())
            .add_source(Location(0, 0), Color::RED)
            .clear_location(Location(0, 0))
            .add_mixer(Location(0, 0))
            .tutorial("mix it")
            .build()
            .unwrap();
        assert!(level.sources().is_empty());
        assert!(level.is_mixer(Location(0, 0)));
        assert_eq!(level.tutorial(), Some("mix it"));

        let mut builder = LevelBuilder::with_size(1, NonZero::new(100_000).unwrap());
        builder.add_source(Location(0, 0), Color::RED);
        assert_eq!(builder.build(), Err(&vec![LevelInvalidReason::GridTooLarge(100_000)]));
    }

    #[test]
    fn no_receivers_is_vacuously_complete() {
        let level = LevelBuilder::with_size(1, NonZero::new(2).unwrap())
            .add_source(Location(0, 0), Color::RED)
            .build()
            .unwrap();
        let session = PuzzleSession::new(level, 10.0).unwrap();
        assert!(session.is_level_complete());
    }

    #[test]
    fn builtin_catalog() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.total(), 10);
        assert!(catalog.levels().iter().enumerate().all(|(i, level)| level.number() == i as u32 + 1));

        let first = catalog.get(1).unwrap();
        assert_eq!(first.grid_size().get(), 5);
        assert_eq!(first.tutorial(), Some("Draw a path from the source to match the receiver's color!"));

        let second = catalog.get(2).unwrap();
        assert!(second.is_mixer(Location(2, 2)));
        assert_eq!(second.receivers()[0].target.to_rgb8(), (0x80, 0x00, 0x80));

        assert!(matches!(catalog.get(11), Err(ConfigError::UnknownLevel(11))));
    }

    #[test]
    fn catalog_rejects_bad_levels() {
        let zero = r#"{"levels": [{"number": 1, "grid_size": 0, "sources": [], "receivers": []}]}"#;
        assert!(matches!(LevelCatalog::from_json(zero), Err(ConfigError::Json(_))));

        let overlap = r##"{"levels": [{"number": 1, "grid_size": 3,
            "sources": [{"location": [1, 1], "color": "#FF0000"}],
            "receivers": [{"location": [1, 1], "target": "#FF0000"}]}]}"##;
        assert!(matches!(LevelCatalog::from_json(overlap), Err(ConfigError::Json(_))));

        let bad_color = r#"{"levels": [{"number": 1, "grid_size": 3,
            "sources": [{"location": [0, 0], "color": "red"}], "receivers": []}]}"#;
        assert!(LevelCatalog::from_json(bad_color).is_err());

        let huge = r#"{"levels": [{"number": 1, "grid_size": 100000, "sources": [], "receivers": []}]}"#;
        assert!(matches!(LevelCatalog::from_json(huge), Err(ConfigError::Json(_))));
    }

    #[test]
    fn red_and_green_make_yellow() {
        let level = LevelCatalog::builtin().unwrap().get(4).unwrap().clone();
        let mut session = PuzzleSession::new(level, 600.0).unwrap();

        assert_eq!(draw(&mut session, &RED_FEED), PathOutcome::Committed { level_completed: false });
        assert_eq!(draw(&mut session, &[(4, 0), (3, 0), (2, 0), (2, 1), (2, 2)]), PathOutcome::Committed { level_completed: false });
        assert_eq!(draw(&mut session, &[(2, 2), (2, 3), (2, 4)]), PathOutcome::Committed { level_completed: false });
        assert!(session.is_receiver_satisfied(Location(2, 4)));
        assert!(!session.is_receiver_satisfied(Location(4, 4)));

        // a source may start more than one path
        assert_eq!(draw(&mut session, &[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]), PathOutcome::Committed { level_completed: true });
    }

    #[test]
    fn progress_tracking() {
        let mut progress = Progress::load(MemoryStore::default(), 3);
        assert_eq!((progress.current_level(), progress.highest_unlocked()), (1, 1));
        assert!(progress.is_level_unlocked(1));
        assert!(!progress.is_level_unlocked(2));

        progress.complete_level(1);
        progress.complete_level(1);
        assert_eq!(progress.highest_unlocked(), 2);
        assert!(progress.is_level_completed(1));
        assert!(!progress.is_level_completed(2));

        progress.update_current_level(3);
        assert_eq!(progress.current_level(), 1);
        progress.update_current_level(2);
        assert_eq!(progress.current_level(), 2);

        progress.complete_level(2);
        progress.complete_level(3);
        assert_eq!(progress.highest_unlocked(), 3);
        progress.update_current_level(4);
        assert_eq!(progress.current_level(), 2);

        let restored = Progress::load(progress.into_store(), 3);
        assert_eq!((restored.current_level(), restored.highest_unlocked()), (2, 3));
    }
}
