use crate::foundation::core::Point;

/// Raw pointer state. Leaf input source: it only records what the host reports.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PointerTracker {
    fine: bool,
    pointer: Point,
    pressed: bool,
    visible: bool,
}

impl PointerTracker {
    pub(crate) fn new(offscreen: Point) -> Self {
        Self {
            fine: false,
            pointer: offscreen,
            pressed: false,
            visible: false,
        }
    }

    pub(crate) fn is_fine(&self) -> bool {
        self.fine
    }

    pub(crate) fn set_fine(&mut self, fine: bool) {
        self.fine = fine;
    }

    pub(crate) fn pointer(&self) -> Point {
        self.pointer
    }

    pub(crate) fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn record_move(&mut self, p: Point) {
        self.pointer = p;
        self.visible = true;
    }

    pub(crate) fn press(&mut self) {
        self.pressed = true;
    }

    pub(crate) fn release(&mut self) {
        self.pressed = false;
    }

    pub(crate) fn leave(&mut self, offscreen: Point) {
        self.pointer = offscreen;
        self.visible = false;
        self.pressed = false;
    }
}
