#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Number of slides on the auth page's marketing panel.
pub const SLIDE_COUNT: usize = 3;

/// Zero-based index of the currently visible carousel slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub slide: usize,
}

impl CarouselState {
    /// Advance to the next slide, wrapping back to the first.
    pub fn advance(&mut self) {
        self.slide = (self.slide + 1) % SLIDE_COUNT;
    }

    /// Jump directly to a slide (dot navigation).
    pub fn select(&mut self, slide: usize) {
        self.slide = slide % SLIDE_COUNT;
    }
}
