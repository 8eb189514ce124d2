//! Intersection observation over laid-out page elements.
//!
//! The host reports the viewport and element rectangles once per frame via
//! [`IntersectionObserver::process`]; the observer answers with entries for
//! targets that were just observed or whose intersecting state flipped.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    str::FromStr,
};

use shared::domain::ElementId;
use thiserror::Error;

use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootMarginError {
    #[error("root margin must have 1 to 4 values, got {0}")]
    WrongArity(usize),
    #[error("invalid root margin value '{0}' (expected e.g. '10px' or '-30%')")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginValue {
    Px(f32),
    Percent(f32),
}

impl MarginValue {
    fn resolve(self, extent: f32) -> f32 {
        match self {
            MarginValue::Px(px) => px,
            MarginValue::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl FromStr for MarginValue {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RootMarginError::InvalidValue(s.to_string());
        if let Some(pct) = s.strip_suffix('%') {
            return pct.parse().map(MarginValue::Percent).map_err(|_| invalid());
        }
        if let Some(px) = s.strip_suffix("px") {
            return px.parse().map(MarginValue::Px).map_err(|_| invalid());
        }
        if s == "0" {
            return Ok(MarginValue::Px(0.0));
        }
        Err(invalid())
    }
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(v) => write!(f, "{v}px"),
            MarginValue::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Per-edge adjustment of the root rectangle, in CSS shorthand order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(MarginValue::Px(0.0))
    }
}

impl RootMargin {
    pub fn uniform(value: MarginValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Band used for section tracking: skips the top 30% and bottom 70%.
    pub fn detection_band() -> Self {
        Self {
            top: MarginValue::Percent(-30.0),
            right: MarginValue::Px(0.0),
            bottom: MarginValue::Percent(-70.0),
            left: MarginValue::Px(0.0),
        }
    }

    pub fn apply(&self, root: Rect) -> Rect {
        let (w, h) = (root.width(), root.height());
        root.expand(
            self.top.resolve(h),
            self.right.resolve(w),
            self.bottom.resolve(h),
            self.left.resolve(w),
        )
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(str::parse::<MarginValue>)
            .collect::<Result<Vec<_>, _>>()?;
        let [top, right, bottom, left] = match values.as_slice() {
            [all] => [*all; 4],
            [v, h] => [*v, *h, *v, *h],
            [t, h, b] => [*t, *h, *b, *h],
            [t, r, b, l] => [*t, *r, *b, *l],
            other => return Err(RootMarginError::WrongArity(other.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the target that counts as intersecting.
    pub threshold: f32,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::default(),
        }
    }
}

impl ObserverOptions {
    /// Clamped to `0.0..=1.0`; NaN keeps the default of any overlap.
    pub fn with_threshold(threshold: f32) -> Self {
        let defaults = Self::default();
        if threshold.is_nan() {
            return defaults;
        }
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..defaults
        }
    }

    pub fn with_root_margin(root_margin: RootMargin) -> Self {
        Self {
            root_margin,
            ..Self::default()
        }
    }
}

/// Where the observer looks up element rectangles each frame.
pub trait LayoutSource {
    fn rect_of(&self, element: ElementId) -> Option<Rect>;
}

impl LayoutSource for HashMap<ElementId, Rect> {
    fn rect_of(&self, element: ElementId) -> Option<Rect> {
        self.get(&element).copied()
    }
}

impl LayoutSource for BTreeMap<ElementId, Rect> {
    fn rect_of(&self, element: ElementId) -> Option<Rect> {
        self.get(&element).copied()
    }
}

impl LayoutSource for [(ElementId, Rect)] {
    fn rect_of(&self, element: ElementId) -> Option<Rect> {
        self.iter()
            .find(|(id, _)| *id == element)
            .map(|(_, rect)| *rect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub subscription: Subscription,
    pub element: ElementId,
    pub is_intersecting: bool,
    pub ratio: f32,
    pub bounds: Rect,
}

#[derive(Debug)]
struct Registration {
    element: ElementId,
    last_intersecting: Option<bool>,
}

#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    next_subscription: u64,
    registrations: BTreeMap<Subscription, Registration>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            next_subscription: 0,
            registrations: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn observe(&mut self, element: ElementId) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.registrations.insert(
            subscription,
            Registration {
                element,
                last_intersecting: None,
            },
        );
        subscription
    }

    /// Returns `false` when the subscription was already released.
    pub fn unobserve(&mut self, subscription: Subscription) -> bool {
        self.registrations.remove(&subscription).is_some()
    }

    pub fn disconnect(&mut self) {
        self.registrations.clear();
    }

    pub fn is_observing(&self, subscription: Subscription) -> bool {
        self.registrations.contains_key(&subscription)
    }

    pub fn observed_count(&self) -> usize {
        self.registrations.len()
    }

    /// Computes this frame's entries in registration order.
    ///
    /// Targets missing from `layout` are treated as not rendered, i.e. not
    /// intersecting.
    pub fn process<L>(&mut self, viewport: Rect, layout: &L) -> Vec<IntersectionEntry>
    where
        L: LayoutSource + ?Sized,
    {
        let root = self.options.root_margin.apply(viewport);
        let threshold = self.options.threshold;
        let mut entries = Vec::new();

        for (subscription, registration) in self.registrations.iter_mut() {
            let rect = layout.rect_of(registration.element);
            let bounds = rect.unwrap_or_default();
            let (is_intersecting, ratio) = match rect
                .and_then(|rect| rect.intersection(&root).map(|hit| (rect, hit)))
            {
                Some((rect, hit)) => {
                    let ratio = if rect.area() > 0.0 {
                        (hit.area() / rect.area()).clamp(0.0, 1.0)
                    } else {
                        1.0
                    };
                    (threshold <= 0.0 || ratio >= threshold, ratio)
                }
                None => (false, 0.0),
            };

            if registration.last_intersecting == Some(is_intersecting) {
                continue;
            }
            registration.last_intersecting = Some(is_intersecting);
            entries.push(IntersectionEntry {
                subscription: *subscription,
                element: registration.element,
                is_intersecting,
                ratio,
                bounds,
            });
        }

        entries
    }
}
