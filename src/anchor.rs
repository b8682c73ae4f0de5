//! Anchors and validated anchor sequences.
use crate::{CurveError, CurveResult, Interpolation};
use core::ops::{Deref, Sub};

/// A point in curve space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// A fixed point on the curve.
///
/// The interpolator shapes the segment that *ends* at this anchor. On the
/// first anchor of a sequence it is never used for evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor<I = Interpolation> {
    pub position: Point,
    pub interpolator: I,
}

impl<I> Anchor<I> {
    pub fn new(x: f64, y: f64, interpolator: impl Into<I>) -> Self {
        Self {
            position: Point::new(x, y),
            interpolator: interpolator.into(),
        }
    }
}

/// An ordered list of anchors with finite, non-decreasing `x`.
///
/// Dereferences to `[Anchor<I>]`, so every [`Curve`](crate::Curve) query is
/// available on it directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorSequence<I = Interpolation> {
    anchors: Vec<Anchor<I>>,
}

impl<I> AnchorSequence<I> {
    /// Validates and wraps `anchors`.
    ///
    /// With the `monotonic_check` feature (on by default) anchors whose `x`
    /// decreases are rejected.
    pub fn new(anchors: Vec<Anchor<I>>) -> CurveResult<Self> {
        for (index, anchor) in anchors.iter().enumerate() {
            let previous = index.checked_sub(1).map(|i| &anchors[i]);
            check_anchor(index, previous, anchor)?;
        }
        Ok(Self { anchors })
    }

    /// Wraps `anchors` without any validation.
    ///
    /// Evaluation still returns defined results for unordered input, they
    /// just won't be meaningful.
    pub fn new_unchecked(anchors: Vec<Anchor<I>>) -> Self {
        Self { anchors }
    }

    /// Appends an anchor to the right end of the sequence.
    pub fn push(&mut self, anchor: Anchor<I>) -> CurveResult<()> {
        check_anchor(self.anchors.len(), self.anchors.last(), &anchor)?;
        self.anchors.push(anchor);
        Ok(())
    }

    pub fn anchors(&self) -> &[Anchor<I>] {
        &self.anchors
    }

    /// Mutable access to the interpolators, e.g. to tweak a shape
    /// parameter. Positions stay untouched, so the ordering holds.
    pub fn interpolators_mut(&mut self) -> impl Iterator<Item = &mut I> {
        self.anchors.iter_mut().map(|anchor| &mut anchor.interpolator)
    }

    pub fn into_inner(self) -> Vec<Anchor<I>> {
        self.anchors
    }
}

fn check_anchor<I>(
    index: usize,
    previous: Option<&Anchor<I>>,
    anchor: &Anchor<I>,
) -> CurveResult<()> {
    if !anchor.position.is_finite() {
        return Err(CurveError::NonFinitePosition { index });
    }

    #[cfg(feature = "monotonic_check")]
    if let Some(previous) = previous {
        if anchor.position.x < previous.position.x {
            return Err(CurveError::UnorderedAnchors {
                index,
                previous: previous.position.x,
                current: anchor.position.x,
            });
        }
    }
    #[cfg(not(feature = "monotonic_check"))]
    let _ = previous;

    Ok(())
}

impl<I> Deref for AnchorSequence<I> {
    type Target = [Anchor<I>];

    fn deref(&self) -> &[Anchor<I>] {
        &self.anchors
    }
}

impl<I> TryFrom<Vec<Anchor<I>>> for AnchorSequence<I> {
    type Error = CurveError;

    fn try_from(anchors: Vec<Anchor<I>>) -> CurveResult<Self> {
        Self::new(anchors)
    }
}

impl<I> From<AnchorSequence<I>> for Vec<Anchor<I>> {
    fn from(sequence: AnchorSequence<I>) -> Self {
        sequence.anchors
    }
}
