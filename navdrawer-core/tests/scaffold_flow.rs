//! End-to-end shell flows: navigation and drawer driven the way a frame
//! loop drives them, with an observer recording what was published.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use navdrawer_core::drawer::DrawerState;
use navdrawer_core::observer::ShellObserver;
use navdrawer_core::scaffold::Scaffold;
use navdrawer_core::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Screen(Screen, Screen),
    Drawer(DrawerState),
}

#[derive(Default)]
struct Recorder {
    seen: Rc<RefCell<Vec<Seen>>>,
}

impl ShellObserver for Recorder {
    fn on_screen_changed(&self, from: Screen, to: Screen) {
        self.seen.borrow_mut().push(Seen::Screen(from, to));
    }

    fn on_drawer_changed(&self, state: DrawerState) {
        self.seen.borrow_mut().push(Seen::Drawer(state));
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn observed_scaffold() -> (Scaffold, Rc<RefCell<Vec<Seen>>>) {
    let mut scaffold = Scaffold::new(Screen::Start, ms(250));
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.seen);
    scaffold.subscribe(Box::new(recorder));
    (scaffold, log)
}

/// Run 50 ms frames until the drawer settles.
fn settle(scaffold: &mut Scaffold) {
    for _ in 0..100 {
        scaffold.tick(ms(50));
        if scaffold.drawer_state().is_settled() {
            return;
        }
    }
    panic!("drawer did not settle within 100 frames");
}

#[test]
fn back_walks_the_visit_order_and_stops_at_the_root() {
    let mut scaffold = Scaffold::with_defaults();

    assert!(scaffold.navigate_to(Screen::Page1));
    assert!(scaffold.navigate_to(Screen::Page2));
    assert_eq!(scaffold.current_screen(), Screen::Page2);
    assert_eq!(scaffold.back_stack(), &[Screen::Start, Screen::Page1]);

    assert!(scaffold.go_back());
    assert_eq!(scaffold.current_screen(), Screen::Page1);
    assert!(scaffold.go_back());
    assert_eq!(scaffold.current_screen(), Screen::Start);
    assert!(!scaffold.go_back());
    assert_eq!(scaffold.current_screen(), Screen::Start);
    assert!(!scaffold.can_go_back());
}

#[test]
fn reselecting_the_active_screen_never_grows_the_stack() {
    let mut scaffold = Scaffold::with_defaults();
    scaffold.navigate_to(Screen::Page1);

    for _ in 0..5 {
        scaffold.select_destination(Screen::Page1);
        settle(&mut scaffold);
    }

    assert_eq!(scaffold.back_stack(), &[Screen::Start]);
    assert!(scaffold.go_back());
    assert!(!scaffold.go_back());
}

#[test]
fn full_drawer_selection_flow_publishes_in_order() {
    let (mut scaffold, log) = observed_scaffold();

    scaffold.open_drawer();
    settle(&mut scaffold);
    scaffold.select_destination(Screen::Page1);
    settle(&mut scaffold);

    assert_eq!(
        log.borrow().as_slice(),
        &[
            Seen::Drawer(DrawerState::Opening),
            Seen::Drawer(DrawerState::Open),
            Seen::Screen(Screen::Start, Screen::Page1),
            Seen::Drawer(DrawerState::Closing),
            Seen::Drawer(DrawerState::Closed),
        ]
    );
    assert_eq!(scaffold.current_screen(), Screen::Page1);
    assert_eq!(scaffold.drawer_state(), DrawerState::Closed);
}

#[test]
fn closing_before_the_open_settles_still_ends_closed() {
    let (mut scaffold, log) = observed_scaffold();

    scaffold.open_drawer();
    scaffold.tick(ms(50));
    scaffold.tick(ms(50));
    assert_eq!(scaffold.drawer_state(), DrawerState::Opening);

    scaffold.close_drawer();
    settle(&mut scaffold);

    assert_eq!(scaffold.drawer_state(), DrawerState::Closed);
    assert_eq!(scaffold.drawer_openness(), 0.0);
    // Open never settled, so no Open notification exists in the log.
    assert_eq!(
        log.borrow().as_slice(),
        &[
            Seen::Drawer(DrawerState::Opening),
            Seen::Drawer(DrawerState::Closing),
            Seen::Drawer(DrawerState::Closed),
        ]
    );
}

#[test]
fn rapid_reversals_land_on_the_last_command() {
    let (mut scaffold, log) = observed_scaffold();

    scaffold.open_drawer();
    scaffold.tick(ms(30));
    scaffold.close_drawer();
    scaffold.tick(ms(10));
    scaffold.open_drawer();
    scaffold.tick(ms(30));
    scaffold.close_drawer();
    scaffold.tick(ms(10));
    scaffold.open_drawer();
    settle(&mut scaffold);

    assert_eq!(scaffold.drawer_state(), DrawerState::Open);
    assert_eq!(log.borrow().last(), Some(&Seen::Drawer(DrawerState::Open)));
}

#[test]
fn navigation_is_independent_of_drawer_position() {
    let mut scaffold = Scaffold::new(Screen::Start, ms(250));

    scaffold.open_drawer();
    scaffold.tick(ms(50));
    assert!(scaffold.navigate_to(Screen::Page2));
    assert_eq!(scaffold.current_screen(), Screen::Page2);
    assert_eq!(scaffold.drawer_state(), DrawerState::Opening);

    assert!(scaffold.go_back());
    assert_eq!(scaffold.current_screen(), Screen::Start);
    assert_eq!(scaffold.drawer_state(), DrawerState::Opening);
}

#[test]
fn drawer_cycles_do_not_touch_the_back_stack() {
    let mut scaffold = Scaffold::with_defaults();
    scaffold.navigate_to(Screen::Page1);

    for _ in 0..3 {
        scaffold.open_drawer();
        settle(&mut scaffold);
        scaffold.close_drawer();
        settle(&mut scaffold);
    }

    assert_eq!(scaffold.current_screen(), Screen::Page1);
    assert_eq!(scaffold.back_stack(), &[Screen::Start]);
}

#[test]
fn no_ops_publish_nothing_between_real_changes() {
    let (mut scaffold, log) = observed_scaffold();

    scaffold.navigate_to(Screen::Start);
    scaffold.go_back();
    scaffold.close_drawer();
    assert!(log.borrow().is_empty());

    scaffold.open_drawer();
    scaffold.open_drawer();
    scaffold.open_drawer();
    assert_eq!(
        log.borrow().as_slice(),
        &[Seen::Drawer(DrawerState::Opening)]
    );
}
