use egui::{Context, PointerButton, Pos2, Rect, Response};

mod router;
pub use router::{EventKind, Handler, route_event};

/// Canvas-space events delivered to the canvas controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the button is held
    PointerMove { position: Pos2 },
    /// Primary button was released (possibly outside the canvas)
    PointerUp { position: Pos2 },
    /// The drawing surface changed size
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

/// The primary-button state egui reports for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub position: Option<Pos2>,
    /// Where the button went down, when it is held
    pub press_origin: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// The canvas owns the pointer: no popup or window is on top of it
    pub canvas_hovered: bool,
}

impl PointerSnapshot {
    pub fn from_context(ctx: &Context, canvas: &Response) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.latest_pos(),
            press_origin: input.pointer.press_origin(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            canvas_hovered: canvas.hovered(),
        })
    }
}

/// Converts raw egui pointer input in screen space into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last canvas-space position reported while the button is held
    drag_pos: Option<Pos2>,
    surface_size: Option<[u32; 2]>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_pos.is_some()
    }

    /// Read this frame's pointer state from egui for the canvas widget
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        self.process(PointerSnapshot::from_context(ctx, canvas), canvas.rect)
    }

    /// Translate one frame of pointer state.
    /// A resize (if any) is always reported before pointer events.
    pub fn process(&mut self, pointer: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let size = surface_size(canvas_rect);
        if self.surface_size != Some(size) {
            self.surface_size = Some(size);
            events.push(InputEvent::Resize {
                width: size[0],
                height: size[1],
            });
        }

        let position = pointer.position.map(|pos| to_canvas(pos, canvas_rect));

        // A press starts a stroke only where the canvas is the topmost widget
        if pointer.pressed && pointer.canvas_hovered && self.drag_pos.is_none() {
            let origin = pointer.press_origin.or(pointer.position);
            if let Some(pos) = origin.filter(|pos| canvas_rect.contains(*pos)) {
                let position = to_canvas(pos, canvas_rect);
                self.drag_pos = Some(position);
                events.push(InputEvent::PointerDown { position });
            }
        }

        if let (Some(last), Some(position)) = (self.drag_pos, position) {
            if last != position {
                self.drag_pos = Some(position);
                events.push(InputEvent::PointerMove { position });
            }
        }

        if pointer.released {
            if let Some(last) = self.drag_pos.take() {
                events.push(InputEvent::PointerUp {
                    position: position.unwrap_or(last),
                });
            }
        }

        events
    }
}

/// Whole-pixel size of the drawing surface, at least 1x1
pub fn surface_size(canvas_rect: Rect) -> [u32; 2] {
    [
        canvas_rect.width().round().max(1.0) as u32,
        canvas_rect.height().round().max(1.0) as u32,
    ]
}

/// Screen position to whole-pixel canvas coordinates
pub fn to_canvas(pos: Pos2, canvas_rect: Rect) -> Pos2 {
    let local = pos - canvas_rect.min;
    Pos2::new(local.x.floor(), local.y.floor())
}
