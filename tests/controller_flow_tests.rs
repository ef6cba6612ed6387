use approx::assert_abs_diff_eq;
use periodic_spline_editor::{
    AppCommand, AppController, AppIntent, AppState, EditorOptions, Interaction, Knot, KnotSet,
    RefreshReason, SplineEditor, SplineError,
};
use std::cell::RefCell;
use std::rc::Rc;

fn scenario_editor() -> SplineEditor {
    SplineEditor::with_knots(
        EditorOptions::with_span(100.0, 100.0),
        [
            Knot::new(0.0, 50.0),
            Knot::new(50.0, 10.0),
            Knot::new(100.0, 50.0),
        ],
    )
    .expect("gültige Optionen")
}

fn record_refreshes(editor: &mut SplineEditor) -> Rc<RefCell<Vec<RefreshReason>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    editor.set_refresh_callback(move |reason| sink.borrow_mut().push(reason));
    log
}

#[test]
fn test_drag_moves_knot_and_curve_follows() {
    let mut editor = scenario_editor();
    let dragged = editor.knots().ids()[1];

    editor.handle_pointer_down(50.0, 10.0).expect("down");
    assert_eq!(editor.interaction().dragged(), Some(dragged));

    editor.handle_pointer_move(60.0, 20.0).expect("move");
    assert_eq!(editor.knots().get(dragged), Some(&Knot::new(60.0, 20.0)));

    editor.handle_pointer_up(60.0, 20.0).expect("up");
    assert_eq!(editor.interaction(), Interaction::Hovering(dragged));
    assert_eq!(editor.knots().len(), 3);

    assert_abs_diff_eq!(editor.evaluate(60.0).expect("lösbar"), 20.0, epsilon = 1e-9);
}

#[test]
fn test_drag_keeps_grab_offset() {
    let mut editor = scenario_editor();
    let dragged = editor.knots().ids()[1];

    editor.handle_pointer_down(53.0, 14.0).expect("down");
    editor.handle_pointer_move(63.0, 24.0).expect("move");

    assert_eq!(editor.knots().get(dragged), Some(&Knot::new(60.0, 20.0)));
}

#[test]
fn test_drag_brings_knot_to_front() {
    let mut editor = scenario_editor();
    let ids = editor.knots().ids();

    editor.handle_pointer_down(50.0, 10.0).expect("down");

    assert_eq!(editor.knots().ids(), vec![ids[0], ids[2], ids[1]]);
}

#[test]
fn test_click_without_move_deletes_exactly_that_knot() {
    let mut editor = scenario_editor();
    let ids = editor.knots().ids();

    editor.handle_pointer_down(50.0, 10.0).expect("down");
    editor.handle_pointer_up(50.0, 10.0).expect("up");

    assert_eq!(editor.knots().ids(), vec![ids[0], ids[2]]);
    assert_eq!(editor.interaction(), Interaction::Idle);
}

#[test]
fn test_click_on_empty_space_adds_knot_at_pointer() {
    let mut editor = scenario_editor();

    editor.handle_pointer_down(200.0, 5.0).expect("down");
    editor.handle_pointer_up(200.0, 5.0).expect("up");

    assert_eq!(editor.knots().len(), 4);
    let (_, added) = editor.knots().iter().last().expect("Knot vorhanden");
    assert_eq!(*added, Knot::new(200.0, 5.0));
    assert_eq!(editor.interaction(), Interaction::Idle);
}

#[test]
fn test_added_knot_outside_span_is_folded_by_solver() {
    let mut editor = scenario_editor();
    editor.handle_pointer_down(130.0, 70.0).expect("down");

    assert_abs_diff_eq!(editor.evaluate(30.0).expect("lösbar"), 70.0, epsilon = 1e-9);
}

#[test]
fn test_refresh_fires_for_mutations_and_hover_changes_only() {
    let mut editor = scenario_editor();
    let log = record_refreshes(&mut editor);

    editor.handle_pointer_move(90.0, 90.0).expect("move");
    assert!(log.borrow().is_empty());

    editor.handle_pointer_move(50.0, 12.0).expect("move");
    editor.handle_pointer_move(51.0, 12.0).expect("move");
    assert_eq!(*log.borrow(), vec![RefreshReason::InteractionChanged]);

    editor.handle_pointer_down(51.0, 12.0).expect("down");
    editor.handle_pointer_move(61.0, 22.0).expect("move");
    editor.handle_pointer_up(61.0, 22.0).expect("up");

    assert_eq!(
        *log.borrow(),
        vec![
            RefreshReason::InteractionChanged,
            RefreshReason::KnotsChanged,
            RefreshReason::KnotsChanged,
            RefreshReason::InteractionChanged,
        ]
    );
}

#[test]
fn test_knot_api_refreshes_once_per_call() {
    let mut editor = scenario_editor();
    let log = record_refreshes(&mut editor);

    let id = editor.add_knot(25.0, 30.0).expect("add");
    editor.move_knot(id, 26.0, 31.0).expect("move");
    editor.delete_knot(id).expect("delete");

    assert_eq!(log.borrow().len(), 3);
    assert!(!editor.knots().contains(id));
}

#[test]
fn test_playhead_flow() {
    let mut editor = scenario_editor();
    let log = record_refreshes(&mut editor);
    assert_eq!(editor.render_scene().playhead_x, None);

    editor.show_playhead().expect("show");
    editor.set_playhead_x(42.0).expect("set");
    assert_eq!(editor.render_scene().playhead_x, Some(42.0));

    editor.hide_playhead().expect("hide");
    assert_eq!(editor.render_scene().playhead_x, None);
    assert_eq!(
        *log.borrow(),
        vec![RefreshReason::PlayheadChanged; 3]
    );
}

#[test]
fn test_invalid_options_fail_and_keep_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new(EditorOptions::with_span(100.0, 100.0));
    state.replace_knots(KnotSet::from_knots([Knot::new(0.0, 1.0), Knot::new(50.0, 2.0)]));

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OptionsChanged {
            options: EditorOptions::with_span(100.0, -5.0),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.options.height, 100.0);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::ApplyOptions { .. })
    ));
}

#[test]
fn test_command_log_records_pointer_flow() {
    let mut controller = AppController::new();
    let mut state = AppState::new(EditorOptions::with_span(100.0, 100.0));
    state.replace_knots(KnotSet::from_knots([Knot::new(50.0, 10.0)]));
    let id = state.knots().ids()[0];

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDown {
                pos: glam::DVec2::new(50.0, 10.0),
            },
        )
        .expect("down");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerUp {
                pos: glam::DVec2::new(50.0, 10.0),
            },
        )
        .expect("up");

    assert!(state
        .command_log
        .entries()
        .contains(&AppCommand::DeleteKnot { id }));
    assert!(state.knots().is_empty());
}

#[test]
fn test_unsolvable_knot_set_yields_error_and_empty_curve() {
    let editor = SplineEditor::with_knots(
        EditorOptions::with_span(100.0, 100.0),
        [
            Knot::new(10.0, 20.0),
            Knot::new(10.0 + 1e-13, 20.0),
            Knot::new(40.0, 80.0),
            Knot::new(70.0, 30.0),
        ],
    )
    .expect("gültige Optionen");

    assert!(matches!(
        editor.evaluate(25.0),
        Err(SplineError::InternalSolver(_))
    ));
    assert!(editor.evaluate_batch(&[0.0, 50.0]).is_err());

    let scene = editor.render_scene();
    assert!(scene.curve.is_empty());
    assert!(!scene.has_curve());
    assert_eq!(scene.knots.len(), 4);
}
