//! End-to-end key flows through the controller, rendered on a test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::io::Write;
use tictactoe_engine::{Mark, Phase};
use tictactoe_tui::{Config, Controller, View};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(controller: &mut Controller, codes: &[KeyCode]) -> bool {
    codes.iter().all(|&code| controller.handle_key(key(code)))
}

fn type_text(controller: &mut Controller, text: &str) {
    for c in text.chars() {
        assert!(controller.handle_key(key(KeyCode::Char(c))));
    }
}

fn digits(controller: &mut Controller, cells: &str) {
    for c in cells.chars() {
        assert!(controller.handle_key(key(KeyCode::Char(c))));
    }
}

fn screen_text(controller: &Controller) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| controller.render(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn started() -> Controller {
    let mut controller = Controller::new(&Config::default());
    type_text(&mut controller, "Alice");
    press(&mut controller, &[KeyCode::Tab]);
    type_text(&mut controller, "Bob");
    press(&mut controller, &[KeyCode::Enter]);
    controller
}

#[test]
fn test_setup_requires_both_names() {
    let mut controller = Controller::new(&Config::default());
    type_text(&mut controller, "Alice");
    press(&mut controller, &[KeyCode::Enter]);

    assert_eq!(controller.view(), View::Setup);
    assert_eq!(controller.engine().phase(), Phase::NotStarted);
    assert!(screen_text(&controller).contains("Player O needs a name"));
}

#[test]
fn test_config_names_prefill_setup() {
    let config = Config::from_toml("player_x = \"Ann\"\nplayer_o = \"Ben\"").unwrap();
    let mut controller = Controller::new(&config);
    press(&mut controller, &[KeyCode::Enter]);
    assert_eq!(controller.view(), View::Board);
    assert_eq!(controller.engine().current_player_name(), Some("Ann"));
}

#[test]
fn test_board_shows_matchup_turn_and_scores() {
    let controller = started();
    assert_eq!(controller.view(), View::Board);
    let text = screen_text(&controller);
    assert!(text.contains("Alice (X) vs Bob (O)"));
    assert!(text.contains("Alice's Turn"));
    assert!(text.contains("Draws"));
}

#[test]
fn test_win_celebrates_then_play_again() {
    let mut controller = started();
    digits(&mut controller, "14253");

    assert_eq!(controller.view(), View::Celebration);
    assert_eq!(controller.engine().celebration(), Some("Alice"));
    let text = screen_text(&controller);
    assert!(text.contains("Winner!"));
    assert!(text.contains("Alice"));

    press(&mut controller, &[KeyCode::Enter]);
    assert_eq!(controller.view(), View::Board);
    assert_eq!(controller.engine().phase(), Phase::InProgress(Mark::X));
    assert_eq!(controller.engine().scores().x(), 1);
}

#[test]
fn test_dismissed_celebration_shows_final_board() {
    let mut controller = started();
    digits(&mut controller, "14253");
    press(&mut controller, &[KeyCode::Char('b')]);

    assert_eq!(controller.view(), View::Board);
    assert!(screen_text(&controller).contains("Alice Wins!"));

    // The decided board ignores further placements.
    digits(&mut controller, "9");
    assert_eq!(controller.engine().scores().x(), 1);
    assert!(controller.engine().board().is_empty(tictactoe_engine::Position::BottomRight));
}

#[test]
fn test_draw_stays_on_board_and_counts() {
    let mut controller = started();
    digits(&mut controller, "123457698");
    assert_eq!(controller.view(), View::Board);
    assert_eq!(controller.engine().scores().draws(), 1);
    assert!(screen_text(&controller).contains("It's a Draw!"));
}

#[test]
fn test_change_players_clears_everything() {
    let mut controller = started();
    digits(&mut controller, "14253");
    press(&mut controller, &[KeyCode::Char('c')]);

    assert_eq!(controller.view(), View::Setup);
    assert_eq!(controller.engine().phase(), Phase::NotStarted);
    assert_eq!(controller.engine().scores().rounds(), 0);
    assert_eq!(controller.engine().names(), None);
}

#[test]
fn test_quit_and_release_events() {
    let mut controller = started();
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    assert!(controller.handle_key(release));
    assert!(!controller.handle_key(key(KeyCode::Char('q'))));
}

#[test]
fn test_ctrl_c_quits_without_resetting_the_match() {
    let mut controller = started();
    digits(&mut controller, "14253");
    press(&mut controller, &[KeyCode::Char('b')]);
    assert_eq!(controller.view(), View::Board);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!controller.handle_key(ctrl_c));
    assert_eq!(controller.view(), View::Board);
    assert_eq!(controller.engine().phase(), Phase::RoundWon(Mark::X));
    assert_eq!(controller.engine().scores().x(), 1);
    assert!(controller.engine().names().is_some());
}

#[test]
fn test_ctrl_c_quits_from_setup_and_celebration() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let mut controller = Controller::new(&Config::default());
    type_text(&mut controller, "Al");
    assert!(!controller.handle_key(ctrl_c));
    assert_eq!(controller.view(), View::Setup);
    assert!(!screen_text(&controller).contains("Alc"));

    let mut controller = started();
    digits(&mut controller, "14253");
    assert!(!controller.handle_key(ctrl_c));
    assert_eq!(controller.view(), View::Celebration);
    assert_eq!(controller.engine().celebration(), Some("Alice"));
}

#[test]
fn test_view_tracks_engine_state() {
    let mut controller = started();
    let in_step = |c: &Controller| {
        (c.view() == View::Celebration) == c.engine().celebration().is_some()
            && (c.view() == View::Setup) == c.engine().names().is_none()
    };
    assert!(in_step(&controller));
    for cell in "14253".chars() {
        digits(&mut controller, &cell.to_string());
        assert!(in_step(&controller));
    }
    press(&mut controller, &[KeyCode::Char('b')]);
    assert!(in_step(&controller));
    press(&mut controller, &[KeyCode::Char('n')]);
    assert!(in_step(&controller));
    digits(&mut controller, "123457698");
    assert!(in_step(&controller));
    press(&mut controller, &[KeyCode::Char('c')]);
    assert!(in_step(&controller));
    assert_eq!(controller.view(), View::Setup);
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"\nplayer_o = \"Bob\"").unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.player_o().as_deref(), Some("Bob"));

    let missing = file.path().with_extension("missing");
    assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());
}
