// src/gui/busy.rs
//! The fetch blocks the UI thread, so a click is turned into work over several
//! frames: one frame is painted with the button disabled before the work runs,
//! and input that queued up while the window was frozen is thrown away after.

use eframe::egui::{Event, RawInput};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    /// Clicked; the disabled button has not been painted yet.
    Requested,
    /// Disabled button is on screen; run on the next frame.
    Painted,
    /// Work finished; stale input still to be dropped.
    Settling,
}

impl FetchState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, FetchState::Idle)
    }

    /// Returns false if a fetch is already under way.
    pub fn request(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = FetchState::Requested;
        true
    }

    /// Called at the start of every frame. True means: run the fetch now.
    pub fn on_frame(&mut self) -> bool {
        match self {
            FetchState::Requested => {
                *self = FetchState::Painted;
                false
            }
            FetchState::Painted => true,
            _ => false,
        }
    }

    pub fn finish(&mut self) {
        *self = FetchState::Settling;
    }

    /// Called before the frame's input is processed.
    pub fn settle(&mut self, raw: &mut RawInput) {
        if *self == FetchState::Settling {
            let dropped = drop_stale_input(raw);
            if dropped > 0 {
                logd!("UI: dropped {} input event(s) queued during fetch", dropped);
            }
            *self = FetchState::Idle;
        }
    }
}

/// Remove clicks and key presses; keep pointer motion, focus, resize and the rest.
pub fn drop_stale_input(raw: &mut RawInput) -> usize {
    let before = raw.events.len();
    raw.events.retain(|e| {
        !matches!(
            e,
            Event::PointerButton { .. } | Event::Key { .. } | Event::Text(_)
        )
    });
    before - raw.events.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, Key, Modifiers, PointerButton};

    fn click(pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(10.0, 10.0),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn work_runs_only_after_a_disabled_frame() {
        let mut st = FetchState::default();
        assert!(st.request());
        assert!(st.is_busy());

        // Frame that paints the disabled button.
        assert!(!st.on_frame());
        assert_eq!(st, FetchState::Painted);

        // Next frame runs the work.
        assert!(st.on_frame());
        st.finish();
        assert!(st.is_busy());
        assert!(!st.on_frame());
    }

    #[test]
    fn second_click_while_busy_is_ignored() {
        let mut st = FetchState::default();
        assert!(st.request());
        assert!(!st.request());
        st.on_frame();
        assert!(!st.request());
    }

    #[test]
    fn clicks_queued_during_fetch_are_dropped() {
        let mut st = FetchState::Settling;
        let mut raw = RawInput::default();
        raw.events = vec![
            click(true),
            Event::PointerMoved(pos2(12.0, 12.0)),
            click(false),
            Event::Key {
                key: Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            },
        ];

        st.settle(&mut raw);

        assert_eq!(st, FetchState::Idle);
        assert_eq!(raw.events, vec![Event::PointerMoved(pos2(12.0, 12.0))]);
    }

    #[test]
    fn input_is_kept_when_not_settling() {
        let mut st = FetchState::Idle;
        let mut raw = RawInput::default();
        raw.events = vec![click(true), click(false)];
        st.settle(&mut raw);
        assert_eq!(raw.events.len(), 2);
    }
}
