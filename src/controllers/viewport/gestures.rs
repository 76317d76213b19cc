use crate::core::data::point::ScreenPoint;
use crate::core::viewport::events::{TouchPoints, ViewportEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Turns raw window input into [`ViewportEvent`]s. Tracks the cursor so
/// buttons and wheel steps can be anchored, and up to two touch contacts.
#[derive(Debug, Clone, Default)]
pub struct GestureTranslator {
    cursor: Option<ScreenPoint>,
    touches: Vec<(u64, ScreenPoint)>,
}

impl GestureTranslator {
    #[must_use]
    pub fn cursor(&self) -> Option<ScreenPoint> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, position: ScreenPoint) -> ViewportEvent {
        self.cursor = Some(position);
        ViewportEvent::PointerMove { position }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn button_pressed(&self) -> Option<ViewportEvent> {
        self.cursor
            .map(|position| ViewportEvent::PointerDown { position })
    }

    #[must_use]
    pub fn button_released(&self) -> ViewportEvent {
        ViewportEvent::PointerUp
    }

    /// `lines_up` is positive when scrolling away from the user, which zooms in.
    #[must_use]
    pub fn wheel(&self, lines_up: f64) -> Option<ViewportEvent> {
        let position = self.cursor?;

        Some(ViewportEvent::WheelZoom {
            position,
            delta_y: -lines_up,
        })
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: ScreenPoint) -> Vec<ViewportEvent> {
        match phase {
            TouchPhase::Started => {
                if self.touches.len() >= 2 || self.index_of(id).is_some() {
                    return Vec::new();
                }
                self.touches.push((id, position));
                self.touch_points()
                    .map(|touches| ViewportEvent::TouchStart { touches })
                    .into_iter()
                    .collect()
            }
            TouchPhase::Moved => {
                let Some(index) = self.index_of(id) else {
                    return Vec::new();
                };
                self.touches[index].1 = position;
                self.touch_points()
                    .map(|touches| ViewportEvent::TouchMove { touches })
                    .into_iter()
                    .collect()
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let Some(index) = self.index_of(id) else {
                    return Vec::new();
                };
                self.touches.remove(index);

                let mut events = vec![ViewportEvent::TouchEnd];
                // The remaining finger carries on as a drag.
                if let Some(touches) = self.touch_points() {
                    events.push(ViewportEvent::TouchStart { touches });
                }
                events
            }
        }
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.touches.iter().position(|(touch_id, _)| *touch_id == id)
    }

    fn touch_points(&self) -> Option<TouchPoints> {
        match self.touches.as_slice() {
            [(_, a)] => Some(TouchPoints::One(*a)),
            [(_, a), (_, b)] => Some(TouchPoints::Two(*a, *b)),
            _ => None,
        }
    }
}
