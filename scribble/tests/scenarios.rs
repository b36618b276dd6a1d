//! End-to-end rounds through the public `Game` API, no runtime involved.

use lexicon::{Lexicon, Roster};
use protocol::{ClientPoint, GameEvent, Mode, Phase, PlayerRequest, PlayerResponse};
use rand::rngs::mock::StepRng;

use scribble::game::{Rules, Setup};
use scribble::{Config, Game};

fn ticks(game: &mut Game<StepRng>, n: usize) {
    for _ in 0..n {
        game.handle(GameEvent::Tick).unwrap();
    }
}

fn player(game: &mut Game<StepRng>, req: PlayerRequest) -> Vec<PlayerResponse> {
    game.handle(req.into()).unwrap()
}

#[test]
fn solo_pizza_round() {
    let config = Config {
        words: vec!["Pizza".to_string()],
        ..Config::new()
    };
    let mut game = Game::new(&config, StepRng::new(0, 0)).unwrap();
    player(&mut game, PlayerRequest::SelectMode(Mode::Solo));
    assert_eq!(game.view().player, "You");
    ticks(&mut game, 60);
    assert_eq!(game.phase(), Phase::Guessing);
    assert_eq!(game.view().time_remaining, 30);

    let out = player(&mut game, PlayerRequest::Guess { msg: "pizza".into() });
    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.view().score, 10);
    let titles: Vec<&str> = out
        .iter()
        .filter_map(|r| match r {
            PlayerResponse::Notice { title, .. } => Some(title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, ["Correct!", "Round Complete!"]);
}

#[test]
fn team_rotation_wraps_around_roster() {
    let setup = Setup {
        lexicon: Lexicon::from_words("t", ["Castle"]).unwrap(),
        roster: Roster::from_members(vec!["A".into(), "B".into(), "C".into()]).unwrap(),
        rules: Rules { draw_secs: 60, guess_secs: 30, points: 10 },
    };
    let mut game = Game::with_setup(setup, &Config::new(), StepRng::new(0, 0));
    player(&mut game, PlayerRequest::SelectMode(Mode::Team));
    assert_eq!(game.view().player, "A");

    for expected in ["B", "C", "A"] {
        ticks(&mut game, 90);
        let round = game.view().round;
        player(&mut game, PlayerRequest::NextRound);
        assert_eq!(game.view().player, expected);
        assert_eq!(game.view().round, round + 1);
    }
}

#[test]
fn reset_wipes_everything() {
    let mut game = Game::new(&Config::new(), StepRng::new(0, 0)).unwrap();
    player(&mut game, PlayerRequest::SelectMode(Mode::Team));
    player(&mut game, PlayerRequest::PointerDown { client: Some(ClientPoint { x: 5.0, y: 5.0 }) });
    player(&mut game, PlayerRequest::PointerMove { client: Some(ClientPoint { x: 300.0, y: 200.0 }) });
    assert!(!game.canvas().is_blank());

    player(&mut game, PlayerRequest::Reset);
    let view = game.view();
    assert_eq!((view.phase, view.score, view.round), (Phase::Waiting, 0, 1));
    assert_eq!(view.mode, None);
    assert!(game.canvas().is_blank());
    assert!(!game.is_stroking());
}

#[test]
fn touch_without_point_starts_at_origin() {
    let mut game = Game::new(&Config::new(), StepRng::new(0, 0)).unwrap();
    player(&mut game, PlayerRequest::SelectMode(Mode::Solo));
    player(&mut game, PlayerRequest::PointerDown { client: None });
    player(&mut game, PlayerRequest::PointerMove { client: Some(ClientPoint { x: 0.0, y: 40.0 }) });
    assert_eq!(game.canvas().pixel(0, 20), Some([0, 0, 0, 0xff]));
}

#[test]
fn user_sharing_a_team_name_still_rotates() {
    let config = Config {
        words: vec!["Pizza".to_string()],
        user_name: "Sarah".to_string(),
        ..Config::new()
    };
    let mut game = Game::new(&config, StepRng::new(0, 0)).unwrap();
    player(&mut game, PlayerRequest::SelectMode(Mode::Team));

    let mut players = vec![game.view().player];
    for _ in 0..5 {
        ticks(&mut game, 90);
        player(&mut game, PlayerRequest::NextRound);
        players.push(game.view().player);
    }
    assert_eq!(players, ["Sarah", "Sarah", "Mike", "Lisa", "David", "Sarah"]);
}
