//! Carousel and modal gallery state for the projects section.
//!
//! Every project card keeps its own image index, and the full-screen modal
//! keeps a separate one. All navigation wraps around in both directions, so
//! an index is always in bounds for the project that owns it.

use std::collections::HashMap;

use thiserror::Error;

use crate::projects::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Step `current` one position in this direction over `len` items.
    ///
    /// An empty sequence always yields 0.
    pub fn step(self, current: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("unknown project: {0}")]
    UnknownProject(String),
    #[error("image index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Keyboard actions available while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Next,
    Previous,
    Close,
}

impl ModalCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Arrows and indicator dots only make sense with something to move between.
pub fn shows_navigation(image_count: usize) -> bool {
    image_count > 1
}

#[derive(Debug, Clone, Copy)]
struct Carousel {
    index: usize,
    len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    selected: Option<Project>,
    image_index: usize,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn project(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.selected.as_ref()?.image(self.image_index)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GalleryController {
    carousels: HashMap<String, Carousel>,
    modal: ModalState,
}

impl GalleryController {
    pub fn new(projects: &[Project]) -> Self {
        let carousels = projects
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    Carousel {
                        index: 0,
                        len: p.image_count(),
                    },
                )
            })
            .collect();
        Self {
            carousels,
            modal: ModalState::default(),
        }
    }

    pub fn index(&self, project_id: &str) -> Option<usize> {
        self.carousels.get(project_id).map(|c| c.index)
    }

    pub fn image_count(&self, project_id: &str) -> Option<usize> {
        self.carousels.get(project_id).map(|c| c.len)
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Move a card's carousel one image, wrapping at either end.
    pub fn advance(
        &mut self,
        project_id: &str,
        direction: Direction,
    ) -> Result<usize, GalleryError> {
        let carousel = self
            .carousels
            .get_mut(project_id)
            .ok_or_else(|| GalleryError::UnknownProject(project_id.to_string()))?;
        carousel.index = direction.step(carousel.index, carousel.len);
        Ok(carousel.index)
    }

    /// Jump a card's carousel straight to `index`, as an indicator dot does.
    pub fn select_index(&mut self, project_id: &str, index: usize) -> Result<(), GalleryError> {
        let carousel = self
            .carousels
            .get_mut(project_id)
            .ok_or_else(|| GalleryError::UnknownProject(project_id.to_string()))?;
        if index >= carousel.len {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: carousel.len,
            });
        }
        carousel.index = index;
        Ok(())
    }

    /// Callers must not open the modal while a drag is in progress.
    pub fn open_modal(&mut self, project: &Project) {
        self.modal = ModalState {
            selected: Some(project.clone()),
            image_index: 0,
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::default();
    }

    pub fn advance_modal(&mut self, direction: Direction) -> Option<usize> {
        let len = self.modal.selected.as_ref()?.image_count();
        self.modal.image_index = direction.step(self.modal.image_index, len);
        Some(self.modal.image_index)
    }

    pub fn apply(&mut self, command: ModalCommand) {
        match command {
            ModalCommand::Next => {
                self.advance_modal(Direction::Next);
            }
            ModalCommand::Previous => {
                self.advance_modal(Direction::Previous);
            }
            ModalCommand::Close => self.close_modal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, images: usize) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            long_description: String::new(),
            images: (0..images).map(|i| format!("/{id}/{i}.png")).collect(),
            technologies: Vec::new(),
            live_url: None,
            github_url: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let gallery = GalleryController::new(&[project("a", 3), project("b", 0)]);
        assert_eq!(gallery.index("a"), Some(0));
        assert_eq!(gallery.index("b"), Some(0));
        assert_eq!(gallery.index("c"), None);
        assert!(!gallery.modal().is_open());
        assert_eq!(gallery.modal().image_index(), 0);
    }

    #[test]
    fn test_advance_counts_modulo_len() {
        for n in 1..=5 {
            let mut gallery = GalleryController::new(&[project("p", n)]);
            for k in 1..=(3 * n) {
                let idx = gallery.advance("p", Direction::Next).unwrap();
                assert_eq!(idx, k % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let mut gallery = GalleryController::new(&[project("p", 4)]);
        assert_eq!(gallery.advance("p", Direction::Previous), Ok(3));
        assert_eq!(gallery.advance("p", Direction::Previous), Ok(2));
        assert_eq!(gallery.advance("p", Direction::Next), Ok(3));
        assert_eq!(gallery.advance("p", Direction::Next), Ok(0));
    }

    #[test]
    fn test_recello_wraps_after_seven() {
        let mut gallery = GalleryController::new(&[project("recello", 7)]);
        for _ in 0..6 {
            gallery.advance("recello", Direction::Next).unwrap();
        }
        assert_eq!(gallery.index("recello"), Some(6));
        gallery.advance("recello", Direction::Next).unwrap();
        assert_eq!(gallery.index("recello"), Some(0));
    }

    #[test]
    fn test_advance_single_and_empty() {
        let mut gallery = GalleryController::new(&[project("one", 1), project("none", 0)]);
        assert_eq!(gallery.advance("one", Direction::Next), Ok(0));
        assert_eq!(gallery.advance("one", Direction::Previous), Ok(0));
        assert_eq!(gallery.advance("none", Direction::Next), Ok(0));
        assert_eq!(gallery.advance("none", Direction::Previous), Ok(0));
    }

    #[test]
    fn test_advance_unknown_project() {
        let mut gallery = GalleryController::new(&[project("a", 2)]);
        assert_eq!(
            gallery.advance("missing", Direction::Next),
            Err(GalleryError::UnknownProject("missing".to_string()))
        );
        assert_eq!(gallery.index("a"), Some(0));
    }

    #[test]
    fn test_select_index() {
        let mut gallery = GalleryController::new(&[project("a", 5), project("b", 5)]);
        gallery.advance("a", Direction::Next).unwrap();
        gallery.advance("a", Direction::Next).unwrap();
        for i in [4, 0, 3, 3, 1] {
            assert_eq!(gallery.select_index("a", i), Ok(()));
            assert_eq!(gallery.index("a"), Some(i));
        }
        // other cards are untouched
        assert_eq!(gallery.index("b"), Some(0));
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut gallery = GalleryController::new(&[project("a", 3)]);
        gallery.select_index("a", 2).unwrap();
        assert_eq!(
            gallery.select_index("a", 3),
            Err(GalleryError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(gallery.index("a"), Some(2));
    }

    #[test]
    fn test_open_modal_starts_at_zero() {
        let a = project("a", 4);
        let mut gallery = GalleryController::new(std::slice::from_ref(&a));
        gallery.select_index("a", 3).unwrap();

        gallery.open_modal(&a);
        assert!(gallery.modal().is_open());
        assert_eq!(gallery.modal().project().map(|p| p.id.as_str()), Some("a"));
        assert_eq!(gallery.modal().image_index(), 0);
        assert_eq!(gallery.modal().current_image(), Some("/a/0.png"));

        // reopening after navigating also resets
        gallery.advance_modal(Direction::Next);
        gallery.open_modal(&a);
        assert_eq!(gallery.modal().image_index(), 0);

        // card index is independent of the modal
        assert_eq!(gallery.index("a"), Some(3));
    }

    #[test]
    fn test_advance_modal() {
        let a = project("a", 3);
        let mut gallery = GalleryController::new(std::slice::from_ref(&a));
        assert_eq!(gallery.advance_modal(Direction::Next), None);

        gallery.open_modal(&a);
        assert_eq!(gallery.advance_modal(Direction::Previous), Some(2));
        assert_eq!(gallery.advance_modal(Direction::Next), Some(0));
        assert_eq!(gallery.advance_modal(Direction::Next), Some(1));
        assert_eq!(gallery.modal().current_image(), Some("/a/1.png"));
        assert_eq!(gallery.index("a"), Some(0));
    }

    #[test]
    fn test_close_modal_resets() {
        let a = project("a", 3);
        let mut gallery = GalleryController::new(std::slice::from_ref(&a));
        gallery.open_modal(&a);
        gallery.advance_modal(Direction::Next);
        gallery.close_modal();
        assert!(!gallery.modal().is_open());
        assert_eq!(gallery.modal().image_index(), 0);
        assert_eq!(gallery.modal().current_image(), None);
        assert_eq!(gallery.advance_modal(Direction::Next), None);
    }

    #[test]
    fn test_modal_commands() {
        assert_eq!(ModalCommand::from_key("ArrowRight"), Some(ModalCommand::Next));
        assert_eq!(ModalCommand::from_key("ArrowLeft"), Some(ModalCommand::Previous));
        assert_eq!(ModalCommand::from_key("Escape"), Some(ModalCommand::Close));
        assert_eq!(ModalCommand::from_key("Enter"), None);

        let a = project("a", 2);
        let mut gallery = GalleryController::new(std::slice::from_ref(&a));
        gallery.open_modal(&a);
        gallery.apply(ModalCommand::Next);
        assert_eq!(gallery.modal().image_index(), 1);
        gallery.apply(ModalCommand::Previous);
        assert_eq!(gallery.modal().image_index(), 0);
        gallery.apply(ModalCommand::Close);
        assert!(!gallery.modal().is_open());
    }

    #[test]
    fn test_shows_navigation() {
        assert!(!shows_navigation(0));
        assert!(!shows_navigation(1));
        assert!(shows_navigation(2));
        assert!(shows_navigation(7));
    }
}
