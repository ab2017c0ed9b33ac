use crossterm::event::{MouseButton, MouseEvent as CtMouseEvent, MouseEventKind as CtKind};

/// The few mouse gestures the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    LeftDown,
    ScrollUp,
    ScrollDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

impl From<CtMouseEvent> for MouseEvent {
    fn from(me: CtMouseEvent) -> Self {
        let kind = match me.kind {
            CtKind::Down(MouseButton::Left) => MouseEventKind::LeftDown,
            CtKind::ScrollUp => MouseEventKind::ScrollUp,
            CtKind::ScrollDown => MouseEventKind::ScrollDown,
            _ => MouseEventKind::Other,
        };
        MouseEvent { column: me.column, row: me.row, kind }
    }
}
