use crate::core::artwork::ArtworkRecord;
use crate::core::gallery::GalleryModel;

/// Cursor over a non-empty gallery, clamped to `0..len`.
///
/// `revision` bumps every time the cursor actually moves, so a view can
/// compare it with the last value it rendered to know it is stale.
pub struct NavigationController {
    gallery: GalleryModel,
    cursor: usize,
    revision: u64,
}

impl NavigationController {
    pub fn new(gallery: GalleryModel) -> Self {
        debug_assert!(!gallery.is_empty());
        Self {
            gallery,
            cursor: 0,
            revision: 0,
        }
    }

    pub fn step_backward(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.revision += 1;
            true
        } else {
            false
        }
    }

    pub fn step_next(&mut self) -> bool {
        if self.cursor + 1 < self.gallery.len() {
            self.cursor += 1;
            self.revision += 1;
            true
        } else {
            false
        }
    }

    pub fn can_step_backward(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_step_next(&self) -> bool {
        self.cursor + 1 < self.gallery.len()
    }

    pub fn current(&self) -> &ArtworkRecord {
        self.gallery.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn gallery(&self) -> &GalleryModel {
        &self.gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::artwork::ImageRef;

    fn gallery_of(len: usize) -> GalleryModel {
        let records = (0..len)
            .map(|i| {
                ArtworkRecord::new(
                    ImageRef::embedded("art.png", &[]),
                    format!("Artwork {i}"),
                    "Someone",
                    "2000",
                )
                .unwrap()
            })
            .collect();
        GalleryModel::new(records).unwrap()
    }

    #[test]
    fn starts_at_first_record() {
        let nav = NavigationController::new(gallery_of(3));
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.revision(), 0);
        assert_eq!(nav.current().title(), "Artwork 0");
    }

    #[test]
    fn current_matches_cursor() {
        let mut nav = NavigationController::new(gallery_of(5));
        for expected in 0..5 {
            assert_eq!(nav.cursor(), expected);
            assert_eq!(nav.current(), nav.gallery().get(expected));
            nav.step_next();
        }
    }

    #[test]
    fn step_backward_clamps_at_zero() {
        let mut nav = NavigationController::new(gallery_of(4));
        assert!(!nav.can_step_backward());
        assert!(!nav.step_backward());
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.revision(), 0);
    }

    #[test]
    fn step_next_clamps_at_last() {
        let mut nav = NavigationController::new(gallery_of(4));
        for _ in 0..3 {
            assert!(nav.step_next());
        }
        assert!(!nav.can_step_next());
        assert!(!nav.step_next());
        assert_eq!(nav.cursor(), 3);
        assert_eq!(nav.revision(), 3);
    }

    #[test]
    fn repeated_steps_saturate() {
        let len = 6;
        for k in 0..len {
            for n in 0..10 {
                let mut nav = NavigationController::new(gallery_of(len));
                for _ in 0..k {
                    nav.step_next();
                }
                for _ in 0..n {
                    nav.step_backward();
                }
                assert_eq!(nav.cursor(), k.saturating_sub(n));

                let mut nav = NavigationController::new(gallery_of(len));
                for _ in 0..k {
                    nav.step_next();
                }
                for _ in 0..n {
                    nav.step_next();
                }
                assert_eq!(nav.cursor(), (k + n).min(len - 1));
            }
        }
    }

    #[test]
    fn cursor_stays_in_range_for_any_sequence() {
        let len = 4;
        let mut nav = NavigationController::new(gallery_of(len));
        // Deterministic pseudo-random walk.
        let mut seed: u32 = 0x9e37_79b9;
        for _ in 0..1_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed & 1 == 0 {
                nav.step_backward();
            } else {
                nav.step_next();
            }
            assert!(nav.cursor() < len);
        }
    }

    #[test]
    fn four_item_walkthrough() {
        let mut nav = NavigationController::new(gallery_of(4));
        nav.step_backward();
        assert_eq!(nav.cursor(), 0);
        for _ in 0..4 {
            nav.step_next();
        }
        assert_eq!(nav.cursor(), 3);
        nav.step_next();
        assert_eq!(nav.cursor(), 3);
        for _ in 0..5 {
            nav.step_backward();
        }
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.revision(), 6);
    }

    #[test]
    fn single_item_gallery_never_moves() {
        let mut nav = NavigationController::new(gallery_of(1));
        assert!(!nav.step_next());
        assert!(!nav.step_backward());
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.current().title(), "Artwork 0");
        assert_eq!(nav.revision(), 0);
    }
}
