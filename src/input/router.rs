use crate::canvas::CanvasController;

use super::InputEvent;

/// Discriminant of an `InputEvent`, used as the dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    Resize,
}

pub type Handler = fn(&mut CanvasController, &InputEvent);

/// Which controller operation handles each kind of event
const DISPATCH_TABLE: [(EventKind, Handler); 4] = [
    (EventKind::PointerDown, pointer_down),
    (EventKind::PointerMove, pointer_move),
    (EventKind::PointerUp, pointer_up),
    (EventKind::Resize, resize),
];

/// Routes an input event to the matching canvas handler
pub fn route_event(event: &InputEvent, canvas: &mut CanvasController) {
    let kind = event.kind();
    if let Some((_, handler)) = DISPATCH_TABLE.iter().find(|(k, _)| *k == kind) {
        handler(canvas, event);
    } else {
        log::warn!("No handler registered for {:?}", kind);
    }
}

fn pointer_down(canvas: &mut CanvasController, event: &InputEvent) {
    if let InputEvent::PointerDown { position } = event {
        canvas.on_pointer_down(*position);
    }
}

fn pointer_move(canvas: &mut CanvasController, event: &InputEvent) {
    if let InputEvent::PointerMove { position } = event {
        canvas.on_pointer_move(*position);
    }
}

fn pointer_up(canvas: &mut CanvasController, event: &InputEvent) {
    if let InputEvent::PointerUp { position } = event {
        canvas.on_pointer_up(*position);
    }
}

fn resize(canvas: &mut CanvasController, event: &InputEvent) {
    if let InputEvent::Resize { width, height } = event {
        canvas.resize(*width, *height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;
    use egui::{Color32, pos2};

    #[test]
    fn test_every_kind_has_a_handler() {
        for kind in [
            EventKind::PointerDown,
            EventKind::PointerMove,
            EventKind::PointerUp,
            EventKind::Resize,
        ] {
            assert!(DISPATCH_TABLE.iter().any(|(k, _)| *k == kind), "{kind:?}");
        }
    }

    #[test]
    fn test_routed_events_reach_controller() {
        let mut canvas = CanvasController::new(10, 10);
        route_event(&InputEvent::Resize { width: 30, height: 20 }, &mut canvas);
        assert_eq!(canvas.bitmap().size(), [30, 20]);

        canvas.select_tool(Tool::Line);
        route_event(&InputEvent::PointerDown { position: pos2(2.0, 2.0) }, &mut canvas);
        route_event(&InputEvent::PointerMove { position: pos2(8.0, 2.0) }, &mut canvas);
        assert!(canvas.render_preview().is_some());

        route_event(&InputEvent::PointerUp { position: pos2(8.0, 2.0) }, &mut canvas);
        assert!(canvas.render_preview().is_none());
        assert_eq!(canvas.bitmap().pixel(5, 2), Some(Color32::BLACK));
    }
}
