//! Five elements and yin/yang polarity.

use serde::Serialize;

/// The five elements, in generating order (each produces the next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Element {
    Wood = 0,
    Fire = 1,
    Earth = 2,
    Metal = 3,
    Water = 4,
}

/// All elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Self::Wood),
            1 => Some(Self::Fire),
            2 => Some(Self::Earth),
            3 => Some(Self::Metal),
            4 => Some(Self::Water),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}

/// Yang (0) or yin (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Polarity {
    Yang = 0,
    Yin = 1,
}

impl Polarity {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Self::Yang),
            1 => Some(Self::Yin),
            _ => None,
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

/// An (element, polarity) attribute pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ElementPolarity {
    pub element: Element,
    pub polarity: Polarity,
}

impl ElementPolarity {
    /// Build from raw table indices. Both tables hold only valid indices,
    /// so out-of-range values fold onto the cycle.
    pub(crate) const fn from_raw(raw: (u8, u8)) -> Self {
        let element = match Element::from_index(raw.0 % 5) {
            Some(e) => e,
            None => Element::Wood,
        };
        let polarity = if raw.1 % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        };
        Self { element, polarity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i as u8), Some(*e));
        }
        assert_eq!(Element::from_index(5), None);
    }

    #[test]
    fn polarity_roundtrip() {
        assert_eq!(Polarity::from_index(0), Some(Polarity::Yang));
        assert_eq!(Polarity::from_index(1), Some(Polarity::Yin));
        assert!(Polarity::Yang.is_yang());
        assert!(!Polarity::Yin.is_yang());
    }
}
