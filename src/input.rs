use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer and key activity, translated from raw egui input
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Primary mouse button was pressed
    PointerDown { location: InputLocation },
    /// Primary mouse button was released
    PointerUp { location: InputLocation },
    /// Mouse moved (with or without the button pressed)
    PointerMove {
        location: InputLocation,
        /// Whether the primary button is currently held down
        primary_down: bool,
    },
    /// Mouse entered the application window
    PointerEnter { location: InputLocation },
    /// Mouse left the application window
    PointerLeave { last_known_location: InputLocation },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

impl InputEvent {
    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerUp { location }
            | InputEvent::PointerMove { location, .. }
            | InputEvent::PointerEnter { location } => location.is_in_canvas,
            InputEvent::PointerLeave { last_known_location } => last_known_location.is_in_canvas,
            InputEvent::KeyDown { .. } => false,
        }
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            // Track pointer position
            if let Some(pos) = input.pointer.hover_pos() {
                // If we didn't have a position before, this is a pointer enter
                if self.last_pointer_pos.is_none() {
                    events.push(InputEvent::PointerEnter {
                        location: self.make_location(pos),
                    });
                }

                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                        primary_down: input.pointer.button_down(PointerButton::Primary),
                    });
                }

                self.last_pointer_pos = Some(pos);
            } else if let Some(last) = self.last_pointer_pos.take() {
                // Pointer left the window
                events.push(InputEvent::PointerLeave {
                    last_known_location: self.make_location(last),
                });
            }

            // Handle button presses
            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = input.pointer.hover_pos() {
                    events.push(InputEvent::PointerDown {
                        location: self.make_location(pos),
                    });
                }
            }
            if input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = input.pointer.hover_pos() {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                    });
                }
            }

            // Handle key events
            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}
