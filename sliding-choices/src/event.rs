/// Input the host dispatches to a [`crate::SlidingChoices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceEvent {
    /// Pointer moved onto item `index`.
    PointerEnter(usize),
    /// Item `index` was clicked.
    Click(usize),
    /// Item `index` received keyboard focus.
    Focus(usize),
    /// Pointer left the whole container.
    PointerLeave,
    /// The viewport was resized or relaid out; positions may have shifted.
    Resize,
}

impl ChoiceEvent {
    /// Item the event targets, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ChoiceEvent::PointerEnter(index)
            | ChoiceEvent::Click(index)
            | ChoiceEvent::Focus(index) => Some(*index),
            ChoiceEvent::PointerLeave | ChoiceEvent::Resize => None,
        }
    }
}
