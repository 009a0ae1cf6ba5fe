use skirmish_core::{Board, Position, SkirmishError, Team, Unit, UnitKind};

fn unit(kind: UnitKind, team: Team, health: i32, ammo: i32, range: i32, power: i32) -> Unit {
    Unit::new(kind, team, health, ammo, range, power).unwrap()
}

fn place(board: &mut Board, at: (i32, i32), unit: Unit) {
    board.add_unit(at.into(), unit).unwrap();
}

#[test]
fn brawler_hits_support_in_same_row() {
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::Brawler, Team::Powerlifters, 10, 5, 3, 4),
    );
    place(
        &mut board,
        (1, 2),
        unit(UnitKind::Support, Team::Crossfitters, 5, 0, 1, 1),
    );

    let report = board.attack(Position::new(1, 1), Position::new(1, 2)).unwrap();

    let target = board.get(Position::new(1, 2)).unwrap();
    assert_eq!(target.health(), 1);
    assert!(target.is_alive());
    assert_eq!(report.hits.len(), 1);
    assert_eq!(board.get(Position::new(1, 1)).unwrap().ammo(), 4);
    assert_eq!(board.unit_count(), 2);
    assert!(!board.is_over());
}

#[test]
fn long_range_streak_doubles_every_third_strike() {
    let mut board = Board::new(1, 6).unwrap();
    let src = Position::new(0, 0);
    let dst = Position::new(0, 4);
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::LongRange, Team::Crossfitters, 5, 3, 5, 2),
    );
    place(
        &mut board,
        (0, 4),
        unit(UnitKind::Brawler, Team::Powerlifters, 100, 0, 1, 1),
    );

    let damages: Vec<_> = (0..3)
        .map(|_| board.attack(src, dst).unwrap().total_damage())
        .collect();

    assert_eq!(damages, vec![2, 2, 4]);
    assert_eq!(board.get(dst).unwrap().health(), 92);
    let sniper = board.get(src).unwrap();
    assert_eq!(sniper.streak(), Some(3));
    assert_eq!(sniper.ammo(), 0);
}

#[test]
fn streak_survives_moves_and_board_copies() {
    let mut board = Board::new(1, 8).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::LongRange, Team::Powerlifters, 5, 9, 4, 1),
    );
    place(
        &mut board,
        (0, 3),
        unit(UnitKind::Support, Team::Crossfitters, 50, 0, 1, 1),
    );

    board.attack(Position::new(0, 0), Position::new(0, 3)).unwrap();
    board.attack(Position::new(0, 0), Position::new(0, 3)).unwrap();
    board.move_unit(Position::new(0, 0), Position::new(0, 1)).unwrap();

    let mut copy = board.clone();
    let third = copy.attack(Position::new(0, 1), Position::new(0, 3)).unwrap();
    assert_eq!(third.total_damage(), 2);
    assert_eq!(board.get(Position::new(0, 1)).unwrap().streak(), Some(2));
    assert_eq!(copy.get(Position::new(0, 1)).unwrap().streak(), Some(3));
}

#[test]
fn brawler_splash_spares_allies_and_primary_is_hit_once() {
    let mut board = Board::new(4, 4).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Brawler, Team::Powerlifters, 10, 1, 3, 6),
    );
    // Primary target and its neighbourhood.
    place(
        &mut board,
        (0, 2),
        unit(UnitKind::Brawler, Team::Crossfitters, 20, 0, 1, 1),
    );
    place(
        &mut board,
        (1, 2),
        unit(UnitKind::Brawler, Team::Crossfitters, 20, 0, 1, 1),
    );
    place(
        &mut board,
        (0, 3),
        unit(UnitKind::Support, Team::Powerlifters, 20, 0, 1, 1),
    );
    place(
        &mut board,
        (3, 3),
        unit(UnitKind::Support, Team::Crossfitters, 20, 0, 1, 1),
    );

    let report = board.attack(Position::new(0, 0), Position::new(0, 2)).unwrap();

    assert_eq!(board.get(Position::new(0, 2)).unwrap().health(), 14);
    // ceil(6 / 2) = 3 splash within ceil(3 / 3) = 1
    assert_eq!(board.get(Position::new(1, 2)).unwrap().health(), 17);
    assert_eq!(board.get(Position::new(0, 3)).unwrap().health(), 20);
    assert_eq!(board.get(Position::new(3, 3)).unwrap().health(), 20);
    assert_eq!(
        report
            .hits
            .iter()
            .filter(|hit| hit.position == Position::new(0, 2))
            .count(),
        1
    );
    assert_eq!(board.get(Position::new(0, 0)).unwrap().ammo(), 0);
}

#[test]
fn brawler_on_empty_cell_still_spends_ammo_and_splashes() {
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Brawler, Team::Powerlifters, 10, 2, 3, 4),
    );
    place(
        &mut board,
        (2, 1),
        unit(UnitKind::Support, Team::Crossfitters, 9, 0, 1, 1),
    );

    board.attack(Position::new(0, 0), Position::new(2, 0)).unwrap();

    assert_eq!(board.get(Position::new(0, 0)).unwrap().ammo(), 1);
    assert_eq!(board.get(Position::new(2, 1)).unwrap().health(), 7);
}

#[test]
fn brawler_rejects_diagonal_targets() {
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Brawler, Team::Powerlifters, 10, 2, 3, 4),
    );
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::Brawler, Team::Crossfitters, 10, 2, 3, 4),
    );

    assert_eq!(
        board.attack(Position::new(0, 0), Position::new(1, 1)),
        Err(SkirmishError::IllegalTarget {
            target: Position::new(1, 1)
        })
    );
}

#[test]
fn support_heals_for_free_and_pays_to_damage() {
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::Support, Team::Powerlifters, 6, 1, 2, 3),
    );
    place(
        &mut board,
        (0, 1),
        unit(UnitKind::Brawler, Team::Powerlifters, 2, 0, 1, 1),
    );
    place(
        &mut board,
        (2, 2),
        unit(UnitKind::Brawler, Team::Crossfitters, 10, 0, 1, 1),
    );

    board.attack(Position::new(1, 1), Position::new(0, 1)).unwrap();
    board.attack(Position::new(1, 1), Position::new(0, 1)).unwrap();
    assert_eq!(board.get(Position::new(0, 1)).unwrap().health(), 8);
    assert_eq!(board.get(Position::new(1, 1)).unwrap().ammo(), 1);

    board.attack(Position::new(1, 1), Position::new(2, 2)).unwrap();
    assert_eq!(board.get(Position::new(2, 2)).unwrap().health(), 7);
    assert_eq!(board.get(Position::new(1, 1)).unwrap().ammo(), 0);

    // Healing still works with an empty magazine; damage does not.
    board.attack(Position::new(1, 1), Position::new(0, 1)).unwrap();
    assert!(matches!(
        board.attack(Position::new(1, 1), Position::new(2, 2)),
        Err(SkirmishError::OutOfAmmo { ammo: 0, cost: 1 })
    ));
}

#[test]
fn support_cannot_target_empty_cells() {
    let mut board = Board::new(2, 2).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Support, Team::Powerlifters, 6, 0, 2, 3),
    );
    assert!(matches!(
        board.attack(Position::new(0, 0), Position::new(1, 1)),
        Err(SkirmishError::IllegalTarget { .. })
    ));
}

#[test]
fn self_targeting_never_corrupts_the_board() {
    let origin = Position::new(1, 1);

    // Support: self-heal is illegal.
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::Support, Team::Powerlifters, 6, 0, 2, 3),
    );
    let before = board.clone();
    assert!(matches!(
        board.attack(origin, origin),
        Err(SkirmishError::IllegalTarget { .. })
    ));
    assert_eq!(board, before);

    // LongRange: the dead zone rejects distance zero.
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::LongRange, Team::Powerlifters, 6, 2, 4, 3),
    );
    assert!(matches!(
        board.attack(origin, origin),
        Err(SkirmishError::OutOfRange { .. })
    ));

    // LongRange with zero range reaches itself but cannot target an ally.
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::LongRange, Team::Powerlifters, 6, 2, 0, 3),
    );
    assert!(matches!(
        board.attack(origin, origin),
        Err(SkirmishError::IllegalTarget { .. })
    ));

    // Brawler: legal, charged once, own cell untouched, neighbours splashed.
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (1, 1),
        unit(UnitKind::Brawler, Team::Powerlifters, 6, 2, 3, 4),
    );
    place(
        &mut board,
        (1, 2),
        unit(UnitKind::Support, Team::Crossfitters, 6, 0, 1, 1),
    );
    board.attack(origin, origin).unwrap();
    let brawler = board.get(origin).unwrap();
    assert_eq!(brawler.health(), 6);
    assert_eq!(brawler.ammo(), 1);
    assert_eq!(board.get(Position::new(1, 2)).unwrap().health(), 4);
}

#[test]
fn last_team_standing_wins() {
    let mut board = Board::new(2, 4).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::LongRange, Team::Crossfitters, 5, 1, 3, 7),
    );
    place(
        &mut board,
        (0, 1),
        unit(UnitKind::Support, Team::Crossfitters, 5, 0, 1, 1),
    );
    place(
        &mut board,
        (1, 2),
        unit(UnitKind::Brawler, Team::Powerlifters, 7, 0, 1, 1),
    );
    assert!(!board.is_over());

    let report = board.attack(Position::new(0, 0), Position::new(1, 2)).unwrap();
    assert_eq!(
        report.removed().collect::<Vec<_>>(),
        vec![Position::new(1, 2)]
    );
    assert!(board.is_cell_empty(Position::new(1, 2)));
    assert!(board.is_over());
    assert_eq!(board.winner(), Some(Team::Crossfitters));
}

#[test]
fn removed_units_free_their_cell() {
    let mut board = Board::new(1, 3).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Brawler, Team::Powerlifters, 5, 1, 2, 9),
    );
    place(
        &mut board,
        (0, 2),
        unit(UnitKind::Brawler, Team::Crossfitters, 5, 1, 2, 9),
    );

    board.attack(Position::new(0, 0), Position::new(0, 2)).unwrap();
    place(
        &mut board,
        (0, 2),
        unit(UnitKind::Support, Team::Crossfitters, 1, 0, 0, 0),
    );
    assert_eq!(board.unit_count(), 2);
}

#[test]
fn maximal_long_range_keeps_its_dead_zone() {
    let mut board = Board::new(1, 3).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::LongRange, Team::Powerlifters, 5, 1, i32::MAX, 1),
    );
    place(
        &mut board,
        (0, 1),
        unit(UnitKind::Brawler, Team::Crossfitters, 5, 0, 0, 0),
    );
    let before = board.clone();

    assert_eq!(
        board.attack(Position::new(0, 0), Position::new(0, 1)),
        Err(SkirmishError::OutOfRange {
            target: Position::new(0, 1),
            distance: 1
        })
    );
    assert_eq!(board, before);
}

#[test]
fn maximal_brawler_resolves_without_losing_the_attacker() {
    let mut board = Board::new(3, 3).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Brawler, Team::Powerlifters, 5, 1, i32::MAX, i32::MAX),
    );
    place(
        &mut board,
        (0, 2),
        unit(UnitKind::Brawler, Team::Crossfitters, i32::MAX, 0, 0, 0),
    );
    place(
        &mut board,
        (2, 2),
        unit(UnitKind::Support, Team::Crossfitters, i32::MAX, 0, 0, 0),
    );

    let report = board.attack(Position::new(0, 0), Position::new(0, 2)).unwrap();

    assert!(board.is_cell_empty(Position::new(0, 2)));
    // ceil(MAX / 2) splash reaches every cell within ceil(MAX / 3).
    assert_eq!(
        board.get(Position::new(2, 2)).unwrap().health(),
        i32::MAX - (1 << 30)
    );
    let attacker = board.get(Position::new(0, 0)).unwrap();
    assert_eq!(attacker.health(), 5);
    assert_eq!(attacker.ammo(), 0);
    assert_eq!(report.total_damage(), i32::MAX);
}

#[test]
fn healing_and_reloading_saturate_at_the_top() {
    let mut board = Board::new(1, 2).unwrap();
    place(
        &mut board,
        (0, 0),
        unit(UnitKind::Support, Team::Powerlifters, 5, i32::MAX - 2, 1, 10),
    );
    place(
        &mut board,
        (0, 1),
        unit(UnitKind::Brawler, Team::Powerlifters, i32::MAX, 0, 0, 0),
    );

    board.attack(Position::new(0, 0), Position::new(0, 1)).unwrap();
    board.reload(Position::new(0, 0)).unwrap();

    let patient = board.get(Position::new(0, 1)).unwrap();
    assert_eq!(patient.health(), i32::MAX);
    assert!(patient.is_alive());
    assert_eq!(board.get(Position::new(0, 0)).unwrap().ammo(), i32::MAX);
}
