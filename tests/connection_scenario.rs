use egui::{Pos2, Vec2};
use nodewire::constants::terminal::SPACING;
use nodewire::scene::ShapeKind;
use nodewire::{theme, Canvas, TerminalId};

fn line_count(canvas: &Canvas) -> usize {
    canvas
        .scene()
        .iter()
        .filter(|shape| matches!(shape.kind, ShapeKind::Line { .. }))
        .count()
}

fn assert_colors_follow_connections(canvas: &Canvas) {
    let colors = theme::colors();
    for terminal in canvas.controller().terminals() {
        let expected = if terminal.has_connections() {
            colors.terminal_active
        } else {
            colors.terminal_idle
        };
        assert_eq!(canvas.terminal_color(terminal.id).unwrap(), expected, "terminal {}", terminal.id);
    }
}

fn drag(canvas: &mut Canvas, from: Pos2, path: &[Pos2]) {
    canvas.pointer_pressed(from);
    for &pos in path {
        canvas.pointer_moved(pos);
    }
    canvas.pointer_released(*path.last().unwrap_or(&from));
    canvas.tick();
}

#[test]
fn test_connection_scenario() {
    let mut canvas = Canvas::blank(Vec2::new(800.0, 600.0));

    let a = canvas.add_node(Pos2::new(100.0, 75.0), 2, 1);
    assert_eq!(canvas.controller().terminals().len(), 3);
    assert_eq!(canvas.node(a).unwrap().height(), SPACING * 3.0);

    let b = canvas.add_node(Pos2::new(400.0, 300.0), 2, 1);
    let output: TerminalId = canvas.node(a).unwrap().outputs()[0];
    let input: TerminalId = canvas.node(b).unwrap().inputs()[0];
    let output_pos = canvas.terminal_position(output).unwrap();
    let input_pos = canvas.terminal_position(input).unwrap();

    // Drag out into empty space
    let empty = Pos2::new(300.0, 300.0);
    canvas.pointer_pressed(output_pos);
    canvas.pointer_moved(empty);
    let rubber_band = canvas.controller().terminal(output).unwrap().rubber_band().unwrap();
    assert!(canvas.scene().is_visible(rubber_band));
    assert_eq!(canvas.scene().line(rubber_band), Some((output_pos, empty)));
    assert_eq!(canvas.controller().drag_source(), Some(output));

    // Release over nothing
    canvas.pointer_released(empty);
    canvas.tick();
    assert!(!canvas.scene().is_visible(rubber_band));
    assert!(canvas.controller().connections().is_empty());
    assert_eq!(canvas.controller().drag_source(), None);
    assert_colors_follow_connections(&canvas);

    // Again, this time entering an input of the second node
    drag(&mut canvas, output_pos, &[empty, input_pos]);
    let connections = canvas.controller().connections();
    assert_eq!(connections.len(), 1);
    let connection = connections.iter().next().unwrap().clone();
    assert_eq!((connection.source, connection.target), (output, input));
    assert_eq!(canvas.connection_line(connection.id), Some((output_pos, input_pos)));
    assert!(canvas.scene().is_visible(connection.line));
    assert_eq!(line_count(&canvas), 2);
    assert!(!canvas.scene().is_visible(rubber_band));
    assert_colors_follow_connections(&canvas);

    // Dragging onto the same input again changes nothing
    drag(&mut canvas, output_pos, &[empty, input_pos]);
    assert_eq!(canvas.controller().connections().len(), 1);
    assert_eq!(line_count(&canvas), 2);

    // Move the source node by its body; the line follows after one tick
    let grab = Pos2::new(150.0, 100.0);
    drag(&mut canvas, grab, &[grab + Vec2::new(20.0, 40.0)]);
    let moved_output = canvas.terminal_position(output).unwrap();
    assert_eq!(moved_output, output_pos + Vec2::new(20.0, 40.0));
    assert_eq!(canvas.connection_line(connection.id), Some((moved_output, input_pos)));
    assert_colors_follow_connections(&canvas);
}

#[test]
fn test_fan_out_through_pointer_events() {
    let mut canvas = Canvas::blank(Vec2::new(1200.0, 900.0));
    let source = canvas.add_node(Pos2::new(150.0, 100.0), 0, 1);
    let sink = canvas.add_node(Pos2::new(500.0, 100.0), 3, 0);
    let output = canvas.node(source).unwrap().outputs()[0];
    let inputs = canvas.node(sink).unwrap().inputs().to_vec();

    let start = canvas.terminal_position(output).unwrap();
    for &input in &inputs {
        let target = canvas.terminal_position(input).unwrap();
        drag(&mut canvas, start, &[Pos2::new(400.0, 400.0), target]);
    }

    let terminal = canvas.controller().terminal(output).unwrap();
    assert_eq!(terminal.children().len(), inputs.len());
    for &input in &inputs {
        let parent = canvas.controller().terminal(input).unwrap().parent().unwrap();
        assert_eq!(canvas.controller().connections().get(parent).unwrap().source, output);
    }
    assert_colors_follow_connections(&canvas);
}

#[test]
fn test_same_node_connection_is_allowed() {
    let mut canvas = Canvas::blank(Vec2::new(800.0, 600.0));
    let node = canvas.add_node(Pos2::new(300.0, 150.0), 1, 1);
    let output = canvas.node(node).unwrap().outputs()[0];
    let input = canvas.node(node).unwrap().inputs()[0];

    let start = canvas.terminal_position(output).unwrap();
    let end = canvas.terminal_position(input).unwrap();
    drag(&mut canvas, start, &[Pos2::new(250.0, 400.0), end]);

    assert_eq!(canvas.controller().connections().len(), 1);
}

#[test]
fn test_rubber_band_follows_node_moved_mid_drag() {
    let mut canvas = Canvas::blank(Vec2::new(800.0, 600.0));
    let node = canvas.add_node(Pos2::new(300.0, 150.0), 1, 1);
    let output = canvas.node(node).unwrap().outputs()[0];
    let start = canvas.terminal_position(output).unwrap();

    canvas.pointer_pressed(start);
    canvas.pointer_moved(Pos2::new(600.0, 500.0));
    canvas.move_node(node, Vec2::new(-50.0, 25.0)).unwrap();

    let line = canvas.controller().terminal(output).unwrap().rubber_band().unwrap();
    let (from, to) = canvas.scene().line(line).unwrap();
    assert_eq!(from, canvas.terminal_position(output).unwrap());
    assert_eq!(to, Pos2::new(600.0, 500.0));
}
