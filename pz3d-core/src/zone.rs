//! Zones partitioning the normalized pointer domain

/// One discrete interactive state: a fixed slice of [0, 1] bound to a resource
#[derive(Debug, Clone, PartialEq)]
pub struct Zone<R> {
    pub index: usize,
    pub resource: R,
}

impl<R> Zone<R> {
    pub fn new(index: usize, resource: R) -> Self {
        Self { index, resource }
    }
}

/// Half-open interval `[start, end)` covered by a zone.
///
/// Bounds are the exact f32 values where [`ZoneLayout::index_for`] changes
/// zone, so `contains` agrees with the mapping on every representable input.
/// The last zone of a layout is closed at 1.0 so that the layout tiles the
/// whole of [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneInterval {
    pub start: f32,
    pub end: f32,
    pub closed: bool,
}

impl ZoneInterval {
    pub fn contains(&self, x: f32) -> bool {
        if self.closed {
            x >= self.start && x <= self.end
        } else {
            x >= self.start && x < self.end
        }
    }
}

/// Equal-width partition of [0, 1] into `count` zones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneLayout {
    count: usize,
}

impl ZoneLayout {
    /// Returns `None` for an empty layout.
    pub fn new(count: usize) -> Option<Self> {
        (count >= 1).then_some(Self { count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Map a normalized coordinate to a zone index.
    ///
    /// The input is clamped to [0, 1] and the result to `[0, count - 1]`, so
    /// `x == 1.0` lands in the last zone instead of one past it.
    pub fn index_for(&self, x: f32) -> usize {
        let x = x.clamp(0.0, 1.0);
        let raw = (x * self.count as f32).floor() as usize;
        raw.min(self.count - 1)
    }

    pub fn interval(&self, index: usize) -> Option<ZoneInterval> {
        if index >= self.count {
            return None;
        }

        Some(ZoneInterval {
            start: self.boundary(index),
            end: self.boundary(index + 1),
            closed: index == self.count - 1,
        })
    }

    /// Smallest x in [0, 1] with `index_for(x) >= index`.
    ///
    /// `index / count` rounded to f32 can sit an ulp either side of where
    /// `floor(x * count)` actually steps, so the estimate is walked to the
    /// exact step point.
    fn boundary(&self, index: usize) -> f32 {
        if index == 0 {
            return 0.0;
        }
        if index >= self.count {
            return 1.0;
        }

        let mut x = index as f32 / self.count as f32;
        while self.index_for(x) < index {
            x = f32::from_bits(x.to_bits() + 1);
        }
        while x > 0.0 && self.index_for(f32::from_bits(x.to_bits() - 1)) >= index {
            x = f32::from_bits(x.to_bits() - 1);
        }
        x
    }

    pub fn intervals(&self) -> impl Iterator<Item = ZoneInterval> + '_ {
        (0..self.count).filter_map(move |i| self.interval(i))
    }
}
