use tui_blockfall::core::{Session, Snapshot};
use tui_blockfall::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use tui_blockfall::types::{PieceKind, Rgba};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Snapshot::default();
    let view = GameView::default();

    // cell_w=2, cell_h=1: 20x20 board plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = Snapshot::default();
    let red = Rgba::new(255, 0, 0);
    // Bottom-left visible cell.
    snap.field[19][0] = Some(red);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg.r, 255);
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_hides_grid_dots_when_disabled() {
    let snap = Snapshot::default();
    let fb = GameView::default()
        .with_grid(false)
        .render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains('·'));
}

#[test]
fn term_view_draws_falling_piece_after_a_tick() {
    let mut session = Session::with_source(|_: usize| PieceKind::O.index());
    let request = session.start();
    session.on_tick(request.token);

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&session.snapshot(), Viewport::new(22, 22));

    // O at pivot (4, 19): lower half in the top visible row, columns 4 and 5.
    let yellow = session.catalog().color(PieceKind::O);
    for col in [4u16, 5] {
        let cell = fb.get(1 + col * 2, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(yellow));
    }
    assert_ne!(fb.get(1 + 4 * 2, 2).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::new(1);
    session.start();
    let mut snap = session.snapshot();
    snap.lines = 12;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));

    assert!(text.contains("LINES"));
    assert!(text.contains("12"));
    assert!(text.contains("SPEED"));
    assert!(text.contains("800ms") || text.contains("800 ms"));
    assert!(text.contains("GAME"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = Snapshot::default();
    let text = screen_text(&GameView::default().render(&snap, Viewport::new(30, 22)));
    assert!(!text.contains("LINES"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Snapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = Snapshot::default();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
