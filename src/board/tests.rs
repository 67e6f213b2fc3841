use super::*;
use crate::draw::{Frame, Primitive};
use crate::label::{DecoratorKind, Label, Layer, Theme};

fn five_labels() -> Board {
    Board::new([
        Label::new("Label 1", 150.0, 150.0),
        Label::new("Label 2", 300.0, 150.0),
        Label::new("Label 3", 450.0, 150.0),
        Label::new("Label 4", 200.0, 250.0),
        Label::new("Label 5", 350.0, 250.0),
    ])
}

#[test]
fn new_board_holds_bare_labels_and_no_selection() {
    let board = five_labels();
    assert_eq!(board.len(), 5);
    assert!(board.selected().is_none());
    assert!(board.slots().iter().all(|layer| layer.depth() == 0));
}

#[test]
fn add_without_selection_is_noop() {
    let mut board = five_labels();
    let before = board.clone();
    assert!(!board.add_decorator(DecoratorKind::Thin));
    assert_eq!(board, before);
}

#[test]
fn remove_without_selection_is_noop() {
    let mut board = five_labels();
    let before = board.clone();
    assert_eq!(board.remove_last_decorator(), None);
    assert_eq!(board, before);
}

#[test]
fn add_then_remove_restores_prior_chain_for_every_slot() {
    let mut board = five_labels();
    for index in 0..board.len() {
        assert!(board.select(index));
        board.add_decorator(DecoratorKind::Thick);
        let prior = board.slot(index).cloned().unwrap();

        for kind in DecoratorKind::ALL {
            assert!(board.add_decorator(kind));
            assert_eq!(board.remove_last_decorator(), Some(kind));
            assert_eq!(board.slot(index), Some(&prior));
        }
    }
}

#[test]
fn remove_on_bare_label_is_noop() {
    let mut board = five_labels();
    board.select(0);
    let before = board.clone();
    assert_eq!(board.remove_last_decorator(), None);
    assert_eq!(board, before);
}

#[test]
fn remove_never_goes_below_depth_zero() {
    let mut board = five_labels();
    board.select(1);
    board.add_decorator(DecoratorKind::Dots);
    board.remove_last_decorator();
    board.remove_last_decorator();
    board.remove_last_decorator();
    assert_eq!(board.slot(1).map(Layer::depth), Some(0));
}

#[test]
fn thin_then_glow_then_remove_leaves_thin() {
    let mut board = five_labels();
    board.select(0);
    board.add_decorator(DecoratorKind::Thin);
    board.add_decorator(DecoratorKind::Glow);
    assert_eq!(board.slot(0).map(Layer::depth), Some(2));

    assert_eq!(board.remove_last_decorator(), Some(DecoratorKind::Glow));
    let layer = board.slot(0).unwrap();
    assert_eq!(layer.depth(), 1);
    assert_eq!(layer.outer_kind(), Some(DecoratorKind::Thin));
}

#[test]
fn decorating_slot_two_leaves_others_untouched() {
    let mut board = five_labels();
    let before = board.clone();
    board.select(2);
    board.add_decorator(DecoratorKind::Dots);

    for index in [0, 1, 3, 4] {
        assert_eq!(board.slot(index), before.slot(index));
    }
    assert_eq!(board.slot(2).map(Layer::depth), Some(1));
    assert_eq!(board.slot(2).map(|l| l.base()), before.slot(2).map(|l| l.base()));
}

#[test]
fn base_label_survives_deep_chains() {
    let mut board = five_labels();
    board.select(4);
    let root = board.selected_label().cloned().unwrap();
    for kind in DecoratorKind::ALL.into_iter().cycle().take(12) {
        board.add_decorator(kind);
        assert_eq!(board.selected_label(), Some(&root));
    }
}

#[test]
fn out_of_range_selection_keeps_previous() {
    let mut board = five_labels();
    board.select(3);
    assert!(!board.select(5));
    assert_eq!(board.selected(), Some(3));
}

#[test]
fn thin_border_on_first_label_is_centered_at_150_150() {
    let mut board = five_labels();
    board.select(0);
    board.add_decorator(DecoratorKind::Thin);

    let mut frame = Frame::new();
    board.slot(0).unwrap().draw(&mut frame, &Theme::default());
    match frame.primitives.last() {
        Some(Primitive::Rect { x, y, w, h, .. }) => {
            assert_eq!((*w, *h), (70.0, 30.0));
            assert_eq!((x + w / 2.0, y + h / 2.0), (150.0, 150.0));
        }
        other => panic!("expected thin border rect, got {other:?}"),
    }
}

#[test]
fn draw_renders_each_label_text_once() {
    let mut board = five_labels();
    board.select(0);
    board.add_decorator(DecoratorKind::Thin);
    board.add_decorator(DecoratorKind::Glow);

    let mut frame = Frame::new();
    board.draw(&mut frame, &Theme::default());
    let texts: Vec<&str> = frame.texts().map(|(text, _, _)| text).collect();
    assert_eq!(
        texts,
        vec!["Label 1", "Label 2", "Label 3", "Label 4", "Label 5"]
    );
}

#[test]
fn commands_parse() {
    assert_eq!("select 2".parse::<Command>(), Ok(Command::Select(2)));
    assert_eq!("  ADD  Glow ".parse::<Command>(), Ok(Command::Add(DecoratorKind::Glow)));
    assert_eq!("remove".parse::<Command>(), Ok(Command::RemoveLast));
    assert_eq!("deselect".parse::<Command>(), Ok(Command::Deselect));
}

#[test]
fn commands_reject_bad_input() {
    assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
    assert!(matches!(
        "paint 3".parse::<Command>(),
        Err(CommandError::UnknownVerb(verb)) if verb == "paint"
    ));
    assert!(matches!(
        "select".parse::<Command>(),
        Err(CommandError::MissingArgument { verb: "select", .. })
    ));
    assert!(matches!(
        "select -1".parse::<Command>(),
        Err(CommandError::InvalidIndex(_))
    ));
    assert!(matches!(
        "add sparkle".parse::<Command>(),
        Err(CommandError::UnknownKind(_))
    ));
    assert!(matches!(
        "remove thin".parse::<Command>(),
        Err(CommandError::UnexpectedArgument { verb: "remove", .. })
    ));
}

#[test]
fn command_display_parses_back() {
    for command in [
        Command::Select(4),
        Command::Deselect,
        Command::Add(DecoratorKind::Dots),
        Command::RemoveLast,
    ] {
        assert_eq!(command.to_string().parse::<Command>(), Ok(command));
    }
}

#[test]
fn script_skips_comments_and_reports_line_numbers() {
    let script = "# decorate the middle label\nselect 2\n\nadd thin\nadd glow\nremove\n";
    assert_eq!(
        Command::parse_script(script),
        Ok(vec![
            Command::Select(2),
            Command::Add(DecoratorKind::Thin),
            Command::Add(DecoratorKind::Glow),
            Command::RemoveLast,
        ])
    );

    let err = Command::parse_script("select 1\nadd confetti\n").unwrap_err();
    assert!(matches!(err, CommandError::AtLine { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2:"));
}

#[test]
fn apply_reports_changes() {
    let mut board = five_labels();
    assert!(!Command::Add(DecoratorKind::Thin).apply(&mut board));
    assert!(Command::Select(0).apply(&mut board));
    assert!(!Command::Select(0).apply(&mut board));
    assert!(!Command::RemoveLast.apply(&mut board));
    assert!(Command::Add(DecoratorKind::Thin).apply(&mut board));
    assert!(Command::RemoveLast.apply(&mut board));
    assert!(Command::Deselect.apply(&mut board));
    assert!(!Command::Deselect.apply(&mut board));
}
