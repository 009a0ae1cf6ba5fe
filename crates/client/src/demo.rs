//! Built-in demonstration scenario.
//!
//! Two small squads on a 4×5 board. The script includes one rejected command
//! and ends with the powerlifters holding the board.
use skirmish_content::{Scenario, UnitSpec};
use skirmish_core::{Command, Position, Team, UnitKind};

fn spec(
    at: (i32, i32),
    kind: UnitKind,
    team: Team,
    [health, ammo, range, power]: [i32; 4],
) -> UnitSpec {
    UnitSpec {
        at: at.into(),
        kind,
        team,
        health,
        ammo,
        range,
        power,
    }
}

fn attack(from: (i32, i32), to: (i32, i32)) -> Command {
    Command::Attack {
        from: from.into(),
        to: to.into(),
    }
}

fn step(from: (i32, i32), to: (i32, i32)) -> Command {
    Command::Move {
        from: from.into(),
        to: to.into(),
    }
}

pub fn scenario() -> Scenario {
    use Team::{Crossfitters, Powerlifters};
    use UnitKind::{Brawler, LongRange, Support};

    Scenario {
        height: 4,
        width: 5,
        units: vec![
            spec((0, 0), Brawler, Powerlifters, [10, 3, 3, 4]),
            spec((1, 0), Support, Powerlifters, [8, 2, 2, 3]),
            spec((0, 3), Brawler, Crossfitters, [5, 2, 2, 3]),
            spec((3, 4), LongRange, Crossfitters, [6, 2, 4, 5]),
        ],
        commands: vec![
            attack((0, 0), (0, 3)),
            // Three cells away from a range-2 brawler.
            attack((0, 3), (0, 0)),
            step((0, 3), (0, 2)),
            attack((0, 2), (0, 0)),
            attack((1, 0), (0, 0)),
            attack((0, 0), (0, 2)),
            step((3, 4), (2, 2)),
            attack((2, 2), (0, 0)),
            Command::Reload {
                at: Position::new(0, 0),
            },
            step((0, 0), (0, 2)),
            attack((0, 2), (2, 2)),
            step((1, 0), (1, 2)),
            attack((1, 2), (2, 2)),
        ],
    }
}
