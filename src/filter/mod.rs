//! Predicate composition for dimension-based image classification
//!
//! A [`FilterSpec`] captures the user's resolved filter choices;
//! [`FilterSpec::classifier`] compiles it into a [`Classifier`], the single
//! boolean function applied to every image's `(width, height)` pair. Each
//! active option group contributes one sub-predicate and the classifier is
//! their logical AND, so a spec with no constraints matches everything.

/// Shape constraint for an image's orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeMode {
    /// No shape constraint
    #[default]
    Any,
    /// Width exceeds height
    Landscape,
    /// Height exceeds width
    Portrait,
}

/// Constraint on a single dimension axis
///
/// One mode per axis. The width and height option groups are mutually
/// exclusive, and this enum keeps a multi-selection unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimMode {
    /// No constraint on this axis
    #[default]
    Any,
    /// Dimension is exactly the given value
    Exact(u32),
    /// Dimension is greater than or equal to the given value
    AtLeast(u32),
    /// Dimension is less than or equal to the given value
    AtMost(u32),
}

/// Resolved, validated set of matching constraints for one run
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSpec {
    pub shape: ShapeMode,
    /// Whether equal-dimension squares satisfy the shape constraint
    pub include_square: bool,
    pub width: DimMode,
    pub height: DimMode,
}

type DimTest = Box<dyn Fn(u32, u32) -> bool>;

/// Pure boolean classifier over an image's pixel dimensions
///
/// Holds one closure per active sub-predicate, each capturing only its
/// threshold. Safe to call any number of times, in any order.
pub struct Classifier {
    tests: Vec<DimTest>,
}

impl FilterSpec {
    /// Compile this spec into a classifier
    pub fn classifier(&self) -> Classifier {
        let mut tests: Vec<DimTest> = Vec::new();

        match (self.shape, self.include_square) {
            (ShapeMode::Landscape, true) => tests.push(Box::new(|w, h| w >= h)),
            (ShapeMode::Landscape, false) => tests.push(Box::new(|w, h| w > h)),
            (ShapeMode::Portrait, true) => tests.push(Box::new(|w, h| w <= h)),
            (ShapeMode::Portrait, false) => tests.push(Box::new(|w, h| w < h)),
            (ShapeMode::Any, _) => {}
        }

        match self.width {
            DimMode::Exact(n) => tests.push(Box::new(move |w, _| w == n)),
            DimMode::AtLeast(n) => tests.push(Box::new(move |w, _| w >= n)),
            DimMode::AtMost(n) => tests.push(Box::new(move |w, _| w <= n)),
            DimMode::Any => {}
        }

        match self.height {
            DimMode::Exact(n) => tests.push(Box::new(move |_, h| h == n)),
            DimMode::AtLeast(n) => tests.push(Box::new(move |_, h| h >= n)),
            DimMode::AtMost(n) => tests.push(Box::new(move |_, h| h <= n)),
            DimMode::Any => {}
        }

        Classifier { tests }
    }

    /// True when no constraint is active
    pub fn is_unconstrained(&self) -> bool {
        self.shape == ShapeMode::Any && self.width == DimMode::Any && self.height == DimMode::Any
    }
}

impl Classifier {
    /// Evaluate every active sub-predicate against the given dimensions
    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.tests.iter().all(|test| test(width, height))
    }
}

#[cfg(test)]
mod tests;
