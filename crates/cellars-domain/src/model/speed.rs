//! Speed - Movement rate per movement mode

use core::str::FromStr;

/// How a creature moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpeedType {
    Walking,
    Flying,
    Swimming,
    Burrowing,
    Climbing,
}

impl SpeedType {
    pub fn name(&self) -> &'static str {
        match self {
            SpeedType::Walking => "WALKING",
            SpeedType::Flying => "FLYING",
            SpeedType::Swimming => "SWIMMING",
            SpeedType::Burrowing => "BURROWING",
            SpeedType::Climbing => "CLIMBING",
        }
    }

    /// All movement types, in stat block order
    pub fn all() -> &'static [SpeedType] {
        &[
            SpeedType::Walking,
            SpeedType::Flying,
            SpeedType::Swimming,
            SpeedType::Burrowing,
            SpeedType::Climbing,
        ]
    }
}

impl core::fmt::Display for SpeedType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSpeedTypeError {
    pub input: String,
}

impl core::fmt::Display for ParseSpeedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown speed type: {}", self.input)
    }
}

impl std::error::Error for ParseSpeedTypeError {}

impl FromStr for SpeedType {
    type Err = ParseSpeedTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SpeedType::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSpeedTypeError {
                input: s.to_string(),
            })
    }
}

/// Movement rate in feet per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Speed {
    speed: i32,
}

impl Speed {
    pub fn new(speed: i32) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }
}

impl core::fmt::Display for Speed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ft.", self.speed)
    }
}
