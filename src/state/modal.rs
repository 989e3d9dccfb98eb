//! Detail modal state: which location is open and which of its images is shown.

use crate::model::TravelLocation;
use crate::util::cwarn;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    locations: Rc<Vec<TravelLocation>>,
    /// Dataset index of the open location; `None` while closed.
    current: Option<usize>,
    /// Always `< images.len()` when the open location has images, else 0.
    image_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open(usize),
    Close,
    PrevImage,
    NextImage,
}

impl ModalState {
    pub fn new(locations: Rc<Vec<TravelLocation>>) -> Self {
        Self {
            locations,
            current: None,
            image_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_location(&self) -> Option<&TravelLocation> {
        self.current.and_then(|i| self.locations.get(i))
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    fn image_count(&self) -> usize {
        self.current_location().map_or(0, |l| l.images.len())
    }

    /// Out-of-range indices leave the state untouched and return `false`.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.locations.len() {
            return false;
        }
        self.current = Some(index);
        self.image_index = 0;
        true
    }

    pub fn close(&mut self) {
        self.current = None;
        self.image_index = 0;
    }

    pub fn prev_image(&mut self) {
        let n = self.image_count();
        if n < 2 {
            return;
        }
        self.image_index = (self.image_index + n - 1) % n;
    }

    pub fn next_image(&mut self) {
        let n = self.image_count();
        if n < 2 {
            return;
        }
        self.image_index = (self.image_index + 1) % n;
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ModalAction::*;
        // Skip the clone (and the re-render it triggers) when nothing would change.
        match action {
            Close if !self.is_open() => return self,
            PrevImage | NextImage if self.image_count() < 2 => return self,
            _ => {}
        }
        let mut new = (*self).clone();
        match action {
            Open(index) => {
                if !new.open(index) {
                    cwarn(&format!(
                        "ignoring open for location {} (dataset has {})",
                        index,
                        new.locations.len()
                    ));
                    return self;
                }
            }
            Close => new.close(),
            PrevImage => new.prev_image(),
            NextImage => new.next_image(),
        }
        Rc::new(new)
    }
}

/// Keyboard shortcuts honoured while the modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Prev,
    Next,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(KeyCommand::Close),
            "ArrowLeft" => Some(KeyCommand::Prev),
            "ArrowRight" => Some(KeyCommand::Next),
            _ => None,
        }
    }

    pub fn action(self) -> ModalAction {
        match self {
            KeyCommand::Close => ModalAction::Close,
            KeyCommand::Prev => ModalAction::PrevImage,
            KeyCommand::Next => ModalAction::NextImage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::location;

    fn dataset() -> Rc<Vec<TravelLocation>> {
        Rc::new(vec![
            location("Kyoto", "Japan", 35.0, 135.7, &["k1.jpg", "k2.jpg", "k3.jpg"]),
            location("Tokyo", "Japan", 35.6, 139.6, &["t1.jpg"]),
            location("Chiang Mai", "Thailand", 18.7, 98.9, &[]),
            location("Hangzhou", "China", 30.2, 120.1, &["a.jpg", "b.jpg"]),
        ])
    }

    fn reduce(state: Rc<ModalState>, actions: &[ModalAction]) -> Rc<ModalState> {
        actions.iter().fold(state, |s, a| s.reduce(*a))
    }

    #[test]
    fn starts_closed() {
        let s = ModalState::new(dataset());
        assert!(!s.is_open());
        assert_eq!(s.current_location(), None);
        assert_eq!(s.image_index(), 0);
    }

    #[test]
    fn open_exposes_the_indexed_location() {
        let data = dataset();
        for i in 0..data.len() {
            let s = Rc::new(ModalState::new(data.clone())).reduce(ModalAction::Open(i));
            let loc = s.current_location().unwrap();
            assert_eq!(loc, &data[i]);
            assert_eq!(loc.name, data[i].name);
            assert_eq!(loc.country, data[i].country);
            assert_eq!(loc.visit_date, data[i].visit_date);
            assert_eq!(loc.description, data[i].description);
            assert_eq!(loc.post_url, data[i].post_url);
        }
    }

    #[test]
    fn open_resets_image_index() {
        let s = Rc::new(ModalState::new(dataset()));
        let s = reduce(s, &[ModalAction::Open(0), ModalAction::NextImage, ModalAction::NextImage]);
        assert_eq!(s.image_index(), 2);
        let s = s.reduce(ModalAction::Open(0));
        assert_eq!(s.image_index(), 0);
        let s = reduce(s, &[ModalAction::NextImage, ModalAction::Open(3)]);
        assert_eq!(s.current_index(), Some(3));
        assert_eq!(s.image_index(), 0);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let s = Rc::new(ModalState::new(dataset()));
        let s = s.reduce(ModalAction::Open(99));
        assert!(!s.is_open());

        let s = reduce(s, &[ModalAction::Open(0), ModalAction::NextImage]);
        let s = s.reduce(ModalAction::Open(4));
        assert_eq!(s.current_index(), Some(0));
        assert_eq!(s.image_index(), 1);
    }

    #[test]
    fn next_and_prev_cycle_back_to_start() {
        for (idx, n) in [(0usize, 3usize), (3, 2)] {
            let start = Rc::new(ModalState::new(dataset())).reduce(ModalAction::Open(idx));
            let s = reduce(start.clone(), &vec![ModalAction::NextImage; n]);
            assert_eq!(s.image_index(), start.image_index());
            let s = reduce(start.clone(), &vec![ModalAction::PrevImage; n]);
            assert_eq!(s.image_index(), start.image_index());
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let s = Rc::new(ModalState::new(dataset())).reduce(ModalAction::Open(0));
        let s = s.reduce(ModalAction::PrevImage);
        assert_eq!(s.image_index(), 2);
        let s = s.reduce(ModalAction::NextImage);
        assert_eq!(s.image_index(), 0);
    }

    #[test]
    fn navigation_is_a_noop_below_two_images() {
        for idx in [1usize, 2] {
            let s = Rc::new(ModalState::new(dataset())).reduce(ModalAction::Open(idx));
            let after = reduce(
                s.clone(),
                &[ModalAction::NextImage, ModalAction::PrevImage, ModalAction::NextImage],
            );
            assert_eq!(after.image_index(), 0);
            assert!(Rc::ptr_eq(&s, &after));
        }
    }

    #[test]
    fn navigation_while_closed_does_nothing() {
        let s = Rc::new(ModalState::new(dataset()));
        let after = reduce(s.clone(), &[ModalAction::NextImage, ModalAction::PrevImage]);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn close_clears_and_is_idempotent() {
        let s = Rc::new(ModalState::new(dataset()));
        let s = reduce(s, &[ModalAction::Open(0), ModalAction::NextImage, ModalAction::Close]);
        assert_eq!(s.current_location(), None);
        assert_eq!(s.image_index(), 0);
        let again = s.clone().reduce(ModalAction::Close);
        assert_eq!(*again, *s);
        assert!(!again.is_open());
    }

    #[test]
    fn key_commands() {
        assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::Close));
        assert_eq!(KeyCommand::from_key("ArrowLeft").map(KeyCommand::action), Some(ModalAction::PrevImage));
        assert_eq!(KeyCommand::from_key("ArrowRight").map(KeyCommand::action), Some(ModalAction::NextImage));
        assert_eq!(KeyCommand::from_key("Enter"), None);
        assert_eq!(KeyCommand::from_key("escape"), None);
    }
}
