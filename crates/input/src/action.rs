/// Camera movement axis for one held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the derived right vector (strafe).
    Left,
    /// Along the derived right vector (strafe).
    Right,
    /// Along the world up axis.
    Up,
    /// Against the world up axis.
    Down,
}

/// A high-level input event the controller consumes.
///
/// The window layer maps key, cursor, and scroll events to actions; the
/// controller never sees raw device events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A movement key held for this frame.
    Move(MoveDirection),
    /// An absolute cursor position sample, in window pixels.
    Look { x: f32, y: f32 },
    /// A scroll step; positive narrows the field of view.
    Zoom(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_constructible() {
        let a = Action::Move(MoveDirection::Forward);
        assert!(matches!(a, Action::Move(MoveDirection::Forward)));
        let b = Action::Look { x: 640.0, y: 360.0 };
        assert!(matches!(b, Action::Look { .. }));
        let c = Action::Zoom(1.0);
        assert!(matches!(c, Action::Zoom(_)));
    }
}
