use std::sync::{Arc, Mutex};
use std::thread;

use reversi::ui::view::{WAITING_TEXT, WON_TEXT, YOUR_TURN_TEXT};
use reversi::ui::{ClientUi, MoveSubmitter, UiEvent};
use reversi::{GameModel, GameStatus, Player};

struct NullSubmitter;

impl MoveSubmitter for NullSubmitter {
    fn submit_move(&self, _row: usize, _col: usize) {}
}

#[test]
fn test_notification_from_other_thread_waits_for_pump() {
    let model = Arc::new(GameModel::new(8, 8, Player::One).unwrap());
    let mut ui = ClientUi::new(model.clone(), NullSubmitter);
    assert!(ui.pump());
    assert_eq!(ui.refreshes(), 1);
    assert_eq!(ui.view().moves_left(), 64);
    assert_eq!(ui.view().status_text(), WAITING_TEXT);

    let network = model.clone();
    thread::spawn(move || {
        network.initialize_game();
        network.request_move();
    })
    .join()
    .unwrap();

    // the notifying thread has finished, yet nothing has touched the view
    assert_eq!(ui.refreshes(), 1);
    assert_eq!(ui.view().moves_left(), 64);
    assert_eq!(ui.view().status_text(), WAITING_TEXT);

    ui.pump();
    assert_eq!(ui.refreshes(), 3);
    assert_eq!(ui.view().moves_left(), 60);
    assert_eq!(ui.view().status_text(), YOUR_TURN_TEXT);
}

#[test]
fn test_observers_run_on_the_mutating_thread() {
    let model = Arc::new(GameModel::new(8, 8, Player::Two).unwrap());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    model.subscribe(move || sink.lock().unwrap().push(thread::current().id()));

    let network = model.clone();
    let network_id = thread::spawn(move || {
        network.initialize_game();
        thread::current().id()
    })
    .join()
    .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![network_id]);
    assert_ne!(network_id, thread::current().id());
}

#[test]
fn test_every_notification_is_applied_in_order() {
    let model = Arc::new(GameModel::new(8, 8, Player::One).unwrap());
    let mut ui = ClientUi::new(model.clone(), NullSubmitter);
    ui.pump();

    let network = model.clone();
    thread::spawn(move || {
        network.initialize_game();
        for _ in 0..10 {
            network.request_move();
            network.end_turn();
        }
        network.finish(GameStatus::Won);
    })
    .join()
    .unwrap();

    ui.pump();
    // 1 initial + 1 initialize + 20 turn changes + 1 finish
    assert_eq!(ui.refreshes(), 23);
    assert_eq!(ui.view().status_text(), WON_TEXT);
    assert!(ui.view().cells().iter().all(|c| !c.enabled));
}

#[test]
fn test_quit_stops_the_loop() {
    let model = Arc::new(GameModel::new(8, 8, Player::One).unwrap());
    let mut ui = ClientUi::new(model, NullSubmitter);
    assert!(ui.pump());
    let queue = ui.queue();
    thread::spawn(move || assert!(queue.post(UiEvent::Quit)))
        .join()
        .unwrap();
    assert!(!ui.pump());
    assert!(!ui.is_running());
}
