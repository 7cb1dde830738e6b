/// Which project card, if any, is under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHover {
    hovered: Option<usize>,
}

impl CardHover {
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(self, card: usize) -> bool {
        self.hovered == Some(card)
    }

    pub fn enter(&mut self, card: usize) {
        self.hovered = Some(card);
    }

    /// Leaving a card that is not the hovered one changes nothing.
    pub fn leave(&mut self, card: usize) {
        if self.hovered == Some(card) {
            self.hovered = None;
        }
    }
}

/// Last pointer position seen over the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: Option<(f64, f64)>,
}

impl PointerTracker {
    pub fn position(self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn moved(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_hovered_card() {
        let mut hover = CardHover::default();
        hover.enter(1);
        hover.enter(2);
        assert_eq!(hover.hovered(), Some(2));

        hover.leave(1);
        assert!(hover.is_hovered(2));

        hover.leave(2);
        assert_eq!(hover.hovered(), None);
    }
}
