//! Property tests over arbitrary command sequences.
//!
//! Commands mix raw clicks (mostly rejected), stock draws, double-activation,
//! undo, and clicks that play an enumerated legal move, so both the
//! rejection paths and real play are exercised.

use klondike_engine::cards::{build_deck, shuffle};
use klondike_engine::core::{Card, GameRng, Move, Position, SessionConfig};
use klondike_engine::session::{Outcome, Session};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Command {
    Draw,
    Click(Position, Option<usize>),
    Auto(Position),
    PlayLegal(usize),
    Undo,
}

fn position() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Stock),
        Just(Position::Waste),
        (0..5usize).prop_map(Position::Foundation),
        (0..8usize).prop_map(Position::Tableau),
    ]
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::Draw),
        4 => (position(), proptest::option::of(0..20usize)).prop_map(|(p, i)| Command::Click(p, i)),
        2 => position().prop_map(Command::Auto),
        4 => any::<usize>().prop_map(Command::PlayLegal),
        1 => Just(Command::Undo),
    ]
}

fn click_move(session: &mut Session, mv: Move) -> Outcome {
    let index = match mv.source {
        Position::Tableau(_) => Some(session.state().pile_len(mv.source) - mv.count),
        _ => None,
    };
    session.select_or_move(mv.source, index);
    session.select_or_move(mv.target, None)
}

fn run(session: &mut Session, command: &Command) -> Outcome {
    match *command {
        Command::Draw => session.draw_stock(),
        Command::Click(position, index) => session.select_or_move(position, index),
        Command::Auto(position) => session.auto_move_to_foundation(position),
        Command::PlayLegal(pick) => {
            // Start from idle so the first click arms the source
            if let Some(selection) = session.selection().copied() {
                session.select_or_move(selection.position, selection.card_index);
            }
            let moves = session.legal_moves();
            if moves.is_empty() {
                session.draw_stock()
            } else {
                click_move(session, moves[pick % moves.len()])
            }
        }
        Command::Undo => session.undo(),
    }
}

proptest! {
    #[test]
    fn prop_cards_conserved(seed in any::<u64>(), commands in prop::collection::vec(command(), 0..150)) {
        let mut session = Session::new(SessionConfig::default().with_seed(seed));

        for command in &commands {
            run(&mut session, command);
            prop_assert!(session.state().is_conserved(), "after {:?}", command);
        }
    }

    #[test]
    fn prop_rejections_change_nothing(seed in any::<u64>(), commands in prop::collection::vec(command(), 0..100)) {
        let mut session = Session::new(SessionConfig::default().with_seed(seed));

        for command in commands.iter().filter(|c| !matches!(c, Command::PlayLegal(_))) {
            let before = session.state().clone();
            let depth = session.history_depth();

            let outcome = run(&mut session, command);

            match outcome {
                Outcome::Selected(_) | Outcome::Deselected | Outcome::Rejected(_) => {
                    prop_assert_eq!(session.state(), &before);
                    prop_assert_eq!(session.history_depth(), depth);
                }
                Outcome::Applied { .. } => {
                    prop_assert_eq!(session.move_count(), before.move_count + 1);
                    prop_assert!(session.selection().is_none());
                }
                Outcome::Undone => prop_assert!(session.selection().is_none()),
            }
        }
    }

    #[test]
    fn prop_move_count_tracks_history(seed in any::<u64>(), commands in prop::collection::vec(command(), 0..120)) {
        // Capacity never reached, so every applied action is still undoable
        let mut session = Session::new(SessionConfig::default().with_seed(seed).with_history_capacity(1024));

        for command in &commands {
            run(&mut session, command);
            prop_assert_eq!(session.move_count() as usize, session.history_depth());
        }
    }

    #[test]
    fn prop_undo_restores_start(
        seed in any::<u64>(),
        commands in prop::collection::vec(command().prop_filter("no undo", |c| !matches!(c, Command::Undo)), 1..60),
    ) {
        let mut session = Session::new(SessionConfig::default().with_seed(seed).with_history_capacity(256));
        let initial = session.state().clone();

        let mut applied = 0;
        for command in &commands {
            if run(&mut session, command).is_applied() {
                applied += 1;
            }
        }
        prop_assert_eq!(session.history_depth(), applied);

        for _ in 0..applied {
            prop_assert_eq!(session.undo(), Outcome::Undone);
        }
        prop_assert_eq!(session.state(), &initial);
        prop_assert!(!session.can_undo());
    }

    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let deck = build_deck();
        let mut shuffled = shuffle(&deck, &mut GameRng::new(seed));
        shuffled.sort_by_key(Card::id);
        prop_assert_eq!(shuffled, deck);
    }
}
