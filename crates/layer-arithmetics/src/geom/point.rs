use std::fmt;

/// An integer point in the layout plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// The two layers the sweep understands. Any other CIF layer name is parsed
/// but ignored by the sweep (see [`Layer::parse`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Polysilicon,
    Diffusion,
}

impl Layer {
    pub const POLYSILICON: &'static str = "polysilicon";
    pub const DIFFUSION: &'static str = "diffusion";

    /// Parse a CIF layer name; `None` for anything not meaningful to the sweep.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            Self::POLYSILICON => Some(Self::Polysilicon),
            Self::DIFFUSION => Some(Self::Diffusion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polysilicon => Self::POLYSILICON,
            Self::Diffusion => Self::DIFFUSION,
        }
    }

    /// The layer that is not `self` — used at the sweep line to query the
    /// *other* layer's status while inserting/removing `self`.
    #[inline]
    pub fn other(&self) -> Self {
        match self {
            Self::Polysilicon => Self::Diffusion,
            Self::Diffusion => Self::Polysilicon,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vertical boundary segment `x: (y0 -> y1)`.
///
/// `y1 > y0` is an *opening* edge (interior to the right of the sweep line);
/// `y1 < y0` is a *closing* edge (interior to the left). This polarity is
/// load-bearing end to end — never normalize it away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VEdge {
    pub layer: Layer,
    pub x: i64,
    pub y0: i64,
    pub y1: i64,
}

impl VEdge {
    #[inline]
    pub fn new(layer: Layer, x: i64, y0: i64, y1: i64) -> Self {
        debug_assert!(y0 != y1, "vertical edge must have y0 != y1");
        Self { layer, x, y0, y1 }
    }

    #[inline]
    pub fn is_opening(&self) -> bool {
        self.y1 > self.y0
    }

    #[inline]
    pub fn lo_hi(&self) -> (i64, i64) {
        if self.y0 < self.y1 {
            (self.y0, self.y1)
        } else {
            (self.y1, self.y0)
        }
    }
}

/// A horizontal boundary segment `y: (x0 -> x1)`, with an analogous
/// direction encoding to [`VEdge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HEdge {
    pub layer: Layer,
    pub y: i64,
    pub x0: i64,
    pub x1: i64,
}
